use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::rental::OverdueNotificationReport;
use crate::domain::{
    Customer, CustomerId, Movie, MovieId, Price, Rental, RentalDays, commands::RentMovies,
};

/// 顧客（リクエスト）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRequest {
    /// 省略時は新しいIDを採番
    pub customer_id: Option<Uuid>,
    pub name: String,
}

/// 映画（リクエスト）
///
/// カタログコンテキストから取得した映画のスナップショット。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRequest {
    pub movie_id: Option<Uuid>,
    pub title: String,
    pub daily_price: Price,
    pub stock: u32,
}

/// 貸出リクエスト（POST /rentals）
///
/// 顧客・映画の省略はサービス側で検証エラーになる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentMoviesRequest {
    #[serde(default)]
    pub customer: Option<CustomerRequest>,
    #[serde(default)]
    pub movies: Option<Vec<MovieRequest>>,
}

impl RentMoviesRequest {
    /// リクエストをコマンドに変換
    pub fn to_command(&self) -> RentMovies {
        let customer = self.customer.as_ref().map(|c| Customer {
            customer_id: c.customer_id.map_or_else(CustomerId::new, CustomerId::from_uuid),
            name: c.name.clone(),
        });

        let movies = self
            .movies
            .iter()
            .flatten()
            .map(|m| Movie {
                movie_id: m.movie_id.map_or_else(MovieId::new, MovieId::from_uuid),
                title: m.title.clone(),
                daily_price: m.daily_price,
                stock: m.stock,
            })
            .collect();

        RentMovies { customer, movies }
    }
}

/// 延長リクエスト（POST /rentals/:id/extend）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendRentalRequest {
    /// 1日以上
    pub extra_days: RentalDays,
}

/// 貸出中の映画（レスポンス）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentedMovieResponse {
    pub movie_id: Uuid,
    pub title: String,
    pub daily_price: Decimal,
}

/// 貸出レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalResponse {
    pub rental_id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub movies: Vec<RentedMovieResponse>,
    pub price: Decimal,
    pub rented_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned: bool,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            rental_id: rental.rental_id.value(),
            customer_id: rental.customer.customer_id.value(),
            customer_name: rental.customer.name,
            movies: rental
                .movies
                .into_iter()
                .map(|m| RentedMovieResponse {
                    movie_id: m.movie_id.value(),
                    title: m.title,
                    daily_price: m.daily_price.value(),
                })
                .collect(),
            price: rental.price.value(),
            rented_at: rental.rented_at,
            due_date: rental.due_date,
            returned: rental.returned,
        }
    }
}

/// 延滞通知バッチのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverdueNotificationResponse {
    pub notified: usize,
    pub failed: usize,
}

impl From<OverdueNotificationReport> for OverdueNotificationResponse {
    fn from(report: OverdueNotificationReport) -> Self {
        Self {
            notified: report.notified,
            failed: report.failed,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
