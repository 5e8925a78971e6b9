use thiserror::Error;

use super::MovieId;

/// 貸出リクエストの検証エラー
///
/// 検証順序は固定：映画 → 顧客 → 在庫。最初に該当したものを返す。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentMoviesError {
    #[error("Movie not informed")]
    MissingMovie,

    #[error("Customer not informed")]
    MissingCustomer,

    /// 最初に見つかった在庫切れの映画
    #[error("Movie out of stock")]
    OutOfStock { movie_id: MovieId },

    /// 料金が計算できる範囲を超えた
    #[error("Rental price out of range")]
    PriceOutOfRange,
}

/// 延長のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtendRentalError {
    /// 既に返却済み
    #[error("Cannot extend returned rental")]
    AlreadyReturned,

    #[error("Extension price out of range")]
    PriceOutOfRange,

    /// 延長後の返却期限が表現できる日付を超える
    #[error("Extended due date out of range")]
    DueDateOutOfRange,
}
