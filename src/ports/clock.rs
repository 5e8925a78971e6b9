use chrono::{DateTime, Utc};

/// 時刻ポート
///
/// 返却期限や延滞判定の基準となる「現在時刻」を提供する。
/// テストでは固定時刻を注入する。
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// システム時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
