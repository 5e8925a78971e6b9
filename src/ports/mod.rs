pub mod clock;
pub mod credit_check;
pub mod notifier;
pub mod rental_store;

pub use clock::*;
pub use credit_check::CreditCheck;
pub use notifier::Notifier;
pub use rental_store::RentalStore;
