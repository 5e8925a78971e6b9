use crate::domain::{Customer, CustomerId};
use crate::ports::notifier::{Notifier as NotifierTrait, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock implementation of Notifier
///
/// Does not send actual notifications.
/// Records every customer it was asked to notify, in call order.
pub struct Notifier {
    sent: Mutex<Vec<CustomerId>>,
    failing: Mutex<HashSet<CustomerId>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
        }
    }

    /// Make notifications to the given customer fail
    pub fn fail_for(&self, customer_id: CustomerId) {
        self.failing.lock().unwrap().insert(customer_id);
    }

    /// All notification attempts, in call order
    pub fn sent(&self) -> Vec<CustomerId> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of notification attempts for one customer
    pub fn count_for(&self, customer_id: CustomerId) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|id| **id == customer_id)
            .count()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifierTrait for Notifier {
    async fn notify_overdue(&self, customer: &Customer) -> Result<()> {
        self.sent.lock().unwrap().push(customer.customer_id);

        if self.failing.lock().unwrap().contains(&customer.customer_id) {
            return Err(format!("Mailbox of {} is unreachable", customer.name).into());
        }

        Ok(())
    }
}
