//! PostgreSQL RentalStore の結合テスト
//!
//! 実データベースが必要なため既定では実行しない。
//! `DATABASE_URL=... cargo test -- --ignored` で実行する。

mod common;

use chrono::{DateTime, Duration, Utc};
use common::*;
use rusty_movie_rental::adapters::postgres::PostgresRentalStore;
use rusty_movie_rental::domain::{Rental, RentalId};
use rusty_movie_rental::ports::RentalStore;
use sqlx::PgPool;

/// PostgreSQLの時刻精度（マイクロ秒）に合わせて丸める
fn truncate_to_micros(dt: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(dt.timestamp_micros()).expect("Invalid timestamp")
}

fn now() -> DateTime<Utc> {
    truncate_to_micros(Utc::now())
}

async fn cleanup_rental(pool: &PgPool, rental_id: RentalId) {
    sqlx::query("DELETE FROM rentals WHERE rental_id = $1")
        .bind(rental_id.value())
        .execute(pool)
        .await
        .expect("Failed to cleanup test rental");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_rental_store_save_and_get_by_id() {
    let pool = create_test_pool().await;
    let store = PostgresRentalStore::new(pool.clone());

    let rental = Rental {
        movies: vec![a_movie(), a_movie_priced("3.99")],
        price: price("7.99"),
        ..a_rental_for(a_customer(), now())
    };

    store.save(rental.clone()).await.expect("Failed to save rental");

    let retrieved = store
        .get_by_id(rental.rental_id)
        .await
        .expect("Failed to get rental")
        .expect("Rental not found");

    assert_eq!(retrieved, rental);

    cleanup_rental(&pool, rental.rental_id).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_rental_store_save_overwrites_existing() {
    let pool = create_test_pool().await;
    let store = PostgresRentalStore::new(pool.clone());

    let rental = a_rental_for(a_customer(), now());
    store.save(rental.clone()).await.unwrap();

    let extended = Rental {
        price: price("15.0"),
        due_date: rental.rented_at + Duration::days(3),
        ..rental.clone()
    };
    store.save(extended.clone()).await.unwrap();

    let retrieved = store.get_by_id(rental.rental_id).await.unwrap().unwrap();
    assert_eq!(retrieved.price, price("15.0"));
    assert_eq!(retrieved.due_date, extended.due_date);

    cleanup_rental(&pool, rental.rental_id).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_rental_store_find_pending_excludes_returned() {
    let pool = create_test_pool().await;
    let store = PostgresRentalStore::new(pool.clone());

    let pending = an_overdue_rental_for(a_customer(), now());
    let returned = Rental {
        rental_id: RentalId::new(),
        returned: true,
        ..pending.clone()
    };
    store.save(pending.clone()).await.unwrap();
    store.save(returned.clone()).await.unwrap();

    let found = store.find_pending_rentals().await.unwrap();

    assert!(found.iter().any(|r| r.rental_id == pending.rental_id));
    assert!(!found.iter().any(|r| r.rental_id == returned.rental_id));

    cleanup_rental(&pool, pending.rental_id).await;
    cleanup_rental(&pool, returned.rental_id).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_rental_store_get_unknown_returns_none() {
    let pool = create_test_pool().await;
    let store = PostgresRentalStore::new(pool);

    let result = store.get_by_id(RentalId::new()).await.unwrap();

    assert!(result.is_none());
}
