pub mod calendar;
pub mod commands;
pub mod customer;
pub mod errors;
pub mod movie;
pub mod rental;
pub mod value_objects;

pub use customer::Customer;
pub use errors::*;
pub use movie::Movie;
pub use rental::{Rental, RentalPolicy};
pub use value_objects::*;
