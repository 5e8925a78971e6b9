use crate::domain::{Rental, RentalId};
use crate::ports::rental_store::{RentalStore as RentalStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory implementation of RentalStore
///
/// Keeps rentals in insertion order and records every saved snapshot,
/// so tests can check what was persisted and how many times.
pub struct RentalStore {
    rentals: Mutex<Vec<Rental>>,
    saved: Mutex<Vec<Rental>>,
    failing: AtomicBool,
}

impl RentalStore {
    pub fn new() -> Self {
        Self {
            rentals: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// Seed rentals without recording them as saves
    pub fn with_rentals(rentals: Vec<Rental>) -> Self {
        let store = Self::new();
        *store.rentals.lock().unwrap() = rentals;
        store
    }

    /// Make every subsequent save fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshots passed to `save`, in call order
    pub fn saved(&self) -> Vec<Rental> {
        self.saved.lock().unwrap().clone()
    }
}

impl Default for RentalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalStoreTrait for RentalStore {
    async fn save(&self, rental: Rental) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("Rental store is unavailable".into());
        }

        self.saved.lock().unwrap().push(rental.clone());

        let mut rentals = self.rentals.lock().unwrap();
        match rentals.iter_mut().find(|r| r.rental_id == rental.rental_id) {
            Some(existing) => *existing = rental,
            None => rentals.push(rental),
        }
        Ok(())
    }

    async fn find_pending_rentals(&self) -> Result<Vec<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .filter(|r| !r.returned)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, rental_id: RentalId) -> Result<Option<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.rental_id == rental_id)
            .cloned())
    }
}
