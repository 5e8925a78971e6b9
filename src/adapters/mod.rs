pub mod log;
pub mod mock;
pub mod postgres;
