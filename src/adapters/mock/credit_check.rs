use crate::domain::{Customer, CustomerId};
use crate::ports::credit_check::{CreditCheck as CreditCheckTrait, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock implementation of CreditCheck
///
/// Supports stateful testing by storing denylisted customer IDs.
/// Can be switched into a failing mode to simulate an unavailable bureau.
pub struct CreditCheck {
    denylisted: Mutex<HashSet<CustomerId>>,
    unavailable: AtomicBool,
    calls: AtomicUsize,
}

impl CreditCheck {
    pub fn new() -> Self {
        Self {
            denylisted: Mutex::new(HashSet::new()),
            unavailable: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a credit check that denylists the given customers
    pub fn with_denylist(customer_ids: impl IntoIterator<Item = CustomerId>) -> Self {
        let check = Self::new();
        check.denylisted.lock().unwrap().extend(customer_ids);
        check
    }

    /// Denylist a customer for testing purposes
    pub fn denylist(&self, customer_id: CustomerId) {
        self.denylisted.lock().unwrap().insert(customer_id);
    }

    /// Make every subsequent lookup fail
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of lookups performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for CreditCheck {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CreditCheckTrait for CreditCheck {
    async fn is_denylisted(&self, customer: &Customer) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err("Credit bureau is unavailable".into());
        }

        Ok(self
            .denylisted
            .lock()
            .unwrap()
            .contains(&customer.customer_id))
    }
}
