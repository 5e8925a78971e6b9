use serde::{Deserialize, Serialize};

use super::{MovieId, Price};

/// 映画（カタログコンテキストから渡されるスナップショット）
///
/// 貸出コンテキストでは読み取り専用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    /// 1日あたりの単価
    pub daily_price: Price,
    /// 在庫数
    pub stock: u32,
}

impl Movie {
    pub fn new(title: impl Into<String>, daily_price: Price, stock: u32) -> Self {
        Self {
            movie_id: MovieId::new(),
            title: title.into(),
            daily_price,
            stock,
        }
    }

    /// 在庫切れか
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
