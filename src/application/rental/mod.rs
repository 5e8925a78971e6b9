mod errors;
mod overdue_notification;
mod rental_service;

pub use errors::{RentalApplicationError, Result};
pub use overdue_notification::{OverdueNotificationReport, notify_overdue_rentals};
pub use rental_service::{
    ServiceDependencies, extend_rental, extend_rental_by_id, load_rental, rent_movies,
};
