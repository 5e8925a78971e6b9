use serde::{Deserialize, Serialize};

use super::{Customer, Movie};

/// コマンド：映画を貸し出す
///
/// 顧客・映画は未指定の場合がある（検証はサービス側で行う）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentMovies {
    pub customer: Option<Customer>,
    pub movies: Vec<Movie>,
}
