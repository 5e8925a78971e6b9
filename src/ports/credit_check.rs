use crate::domain::Customer;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 信用照会サービスポート
///
/// 外部の信用情報機関に顧客が登録（ブラックリスト入り）されているかを問い合わせる。
/// 照会自体が失敗した場合はエラーを返す。
#[async_trait]
pub trait CreditCheck: Send + Sync {
    /// 顧客がブラックリストに載っているか確認する
    ///
    /// ビジネスルール: ブラックリストの顧客には貸し出さない。
    async fn is_denylisted(&self, customer: &Customer) -> Result<bool>;
}
