use crate::domain::Customer;
use crate::ports::notifier::{Notifier as NotifierTrait, Result};
use async_trait::async_trait;

/// 延滞通知をログに出力するNotifier
///
/// メール等の配信基盤を持たない環境向け。
#[derive(Debug, Clone, Copy, Default)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifierTrait for Notifier {
    async fn notify_overdue(&self, customer: &Customer) -> Result<()> {
        tracing::info!(
            customer_id = %customer.customer_id.value(),
            customer_name = %customer.name,
            "Overdue notification sent"
        );
        Ok(())
    }
}
