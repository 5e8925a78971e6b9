use crate::domain::Customer;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 顧客への通知配信メカニズムを抽象化する。
/// 実装はメール、SMSなどが考えられる。
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 延滞通知を顧客に送信する
    ///
    /// 延滞中の貸出1件につき1回呼ばれる。
    async fn notify_overdue(&self, customer: &Customer) -> Result<()>;
}
