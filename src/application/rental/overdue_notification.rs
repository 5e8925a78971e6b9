use crate::domain;

use super::errors::{RentalApplicationError, Result};
use super::rental_service::ServiceDependencies;

/// 延滞通知バッチの結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverdueNotificationReport {
    /// 送信に成功した通知の件数
    pub notified: usize,
    /// 送信に失敗した通知の件数
    pub failed: usize,
}

/// 延滞通知バッチ
///
/// ビジネスルール：
/// - ストアが「未返却」とした貸出のうち、返却期限が現在時刻より前のものを延滞とする
/// - 通知は貸出1件につき1回（同じ顧客でも貸出ごとに通知する）
/// - 通知の失敗はログに残して次の貸出へ進む
///
/// Notifier以外の外部サービスには触れない。
///
/// # エラー
/// 未返却の貸出の取得に失敗した場合のみ `Store` を返す。
pub async fn notify_overdue_rentals(
    deps: &ServiceDependencies,
) -> Result<OverdueNotificationReport> {
    let now = deps.clock.now();
    let mut report = OverdueNotificationReport::default();

    let pending = deps
        .rental_store
        .find_pending_rentals()
        .await
        .map_err(RentalApplicationError::Store)?;

    tracing::debug!(pending = pending.len(), "Scanning pending rentals");

    for rental in pending
        .iter()
        .filter(|rental| domain::rental::is_overdue(rental, now))
    {
        match deps.notifier.notify_overdue(&rental.customer).await {
            Ok(()) => report.notified += 1,
            Err(e) => {
                tracing::warn!(
                    rental_id = %rental.rental_id.value(),
                    customer_id = %rental.customer.customer_id.value(),
                    error = %e,
                    "Failed to send overdue notification"
                );
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        notified = report.notified,
        failed = report.failed,
        "Overdue notification finished"
    );

    Ok(report)
}
