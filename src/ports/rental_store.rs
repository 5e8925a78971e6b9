use crate::domain::{Rental, RentalId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出ストアポート
///
/// 貸出の永続化と検索を抽象化する。
#[async_trait]
pub trait RentalStore: Send + Sync {
    /// 貸出の現在状態を保存する
    ///
    /// 新規の場合は追加、既存の場合は上書き（upsert）する。
    async fn save(&self, rental: Rental) -> Result<()>;

    /// 未返却の貸出を取得する
    ///
    /// 「未返却」の判定はストア側の定義に従う。
    /// 延滞通知バッチで使用される。
    async fn find_pending_rentals(&self) -> Result<Vec<Rental>>;

    /// IDで貸出を取得する
    async fn get_by_id(&self, rental_id: RentalId) -> Result<Option<Rental>>;
}
