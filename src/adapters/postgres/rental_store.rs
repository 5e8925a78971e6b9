use crate::domain::{Customer, CustomerId, Movie, Price, Rental, RentalId};
use crate::ports::rental_store::{RentalStore as RentalStoreTrait, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをRentalに変換する
///
/// 映画リストはJSONBから復元し、金額は値オブジェクトの検証を通す。
fn map_row_to_rental(row: &PgRow) -> Result<Rental> {
    let price: Decimal = row.try_get("price")?;
    let price = Price::try_from(price)?;
    let Json(movies): Json<Vec<Movie>> = row.try_get("movies")?;

    Ok(Rental {
        rental_id: RentalId::from_uuid(row.try_get("rental_id")?),
        customer: Customer {
            customer_id: CustomerId::from_uuid(row.try_get("customer_id")?),
            name: row.try_get("customer_name")?,
        },
        movies,
        price,
        rented_at: row.try_get("rented_at")?,
        due_date: row.try_get("due_date")?,
        returned: row.try_get("returned")?,
    })
}

/// RentalStoreのPostgreSQL実装
pub struct RentalStore {
    pool: PgPool,
}

impl RentalStore {
    /// PostgreSQLコネクションプールから新しいRentalStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalStoreTrait for RentalStore {
    /// 貸出を保存（upsert）
    ///
    /// 延長時は同じIDで上書きされる。created_atは初回保存時のまま。
    async fn save(&self, rental: Rental) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO rentals (
                rental_id,
                customer_id,
                customer_name,
                movies,
                price,
                rented_at,
                due_date,
                returned
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (rental_id)
            DO UPDATE SET
                customer_id = EXCLUDED.customer_id,
                customer_name = EXCLUDED.customer_name,
                movies = EXCLUDED.movies,
                price = EXCLUDED.price,
                rented_at = EXCLUDED.rented_at,
                due_date = EXCLUDED.due_date,
                returned = EXCLUDED.returned,
                updated_at = NOW()
            "#,
        )
        .bind(rental.rental_id.value())
        .bind(rental.customer.customer_id.value())
        .bind(&rental.customer.name)
        .bind(Json(&rental.movies))
        .bind(rental.price.value())
        .bind(rental.rented_at)
        .bind(rental.due_date)
        .bind(rental.returned)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 未返却の貸出を返却期限順に取得
    async fn find_pending_rentals(&self) -> Result<Vec<Rental>> {
        let rows = sqlx::query(
            r#"
            SELECT
                rental_id,
                customer_id,
                customer_name,
                movies,
                price,
                rented_at,
                due_date,
                returned
            FROM rentals
            WHERE returned = FALSE
            ORDER BY due_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_rental).collect()
    }

    /// IDで貸出を取得
    async fn get_by_id(&self, rental_id: RentalId) -> Result<Option<Rental>> {
        let row = sqlx::query(
            r#"
            SELECT
                rental_id,
                customer_id,
                customer_name,
                movies,
                price,
                rented_at,
                due_date,
                returned
            FROM rentals
            WHERE rental_id = $1
            "#,
        )
        .bind(rental_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_rental).transpose()
    }
}
