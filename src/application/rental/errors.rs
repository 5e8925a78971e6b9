use thiserror::Error;

use crate::domain::{ExtendRentalError, MovieId, RentMoviesError};

/// 貸出アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum RentalApplicationError {
    /// 映画が指定されていない
    #[error("Movie not informed")]
    MissingMovie,

    /// 顧客が指定されていない
    #[error("Customer not informed")]
    MissingCustomer,

    /// 在庫切れの映画が含まれている
    #[error("Movie out of stock")]
    OutOfStock { movie_id: MovieId },

    /// 信用照会サービス自体のエラー
    #[error("Problem with credit check service, try again later")]
    CreditCheckUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 料金が計算できる範囲を超えた
    #[error("Rental price out of range")]
    PriceOutOfRange,

    /// 顧客がブラックリストに載っている
    #[error("Customer blacklisted with credit bureau.")]
    CustomerBlacklisted,

    /// 貸出の状態が不正（例: 返却済みの延長）
    #[error("Invalid rental state: {0}")]
    InvalidRentalState(String),

    /// 貸出が見つからない
    #[error("Rental not found")]
    RentalNotFound,

    /// RentalStoreのエラー（ラップせずそのまま伝播）
    #[error(transparent)]
    Store(Box<dyn std::error::Error + Send + Sync>),
}

impl From<RentMoviesError> for RentalApplicationError {
    fn from(err: RentMoviesError) -> Self {
        match err {
            RentMoviesError::MissingMovie => RentalApplicationError::MissingMovie,
            RentMoviesError::MissingCustomer => RentalApplicationError::MissingCustomer,
            RentMoviesError::OutOfStock { movie_id } => {
                RentalApplicationError::OutOfStock { movie_id }
            }
            RentMoviesError::PriceOutOfRange => RentalApplicationError::PriceOutOfRange,
        }
    }
}

impl From<ExtendRentalError> for RentalApplicationError {
    fn from(err: ExtendRentalError) -> Self {
        RentalApplicationError::InvalidRentalState(err.to_string())
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, RentalApplicationError>;
