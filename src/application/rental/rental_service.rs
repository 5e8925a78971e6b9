use crate::domain::{self, Rental, RentalDays, RentalId, RentalPolicy, commands::RentMovies};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{RentalApplicationError, Result};

/// サービスの依存関係
///
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
/// 時刻もポートとして注入し、テストでは固定できるようにする。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub rental_store: Arc<dyn RentalStore>,
    pub credit_check: Arc<dyn CreditCheck>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
    pub policy: RentalPolicy,
}

/// ストアから貸出を取得するヘルパー関数
///
/// # エラー
/// - Store: 読み込み失敗
/// - RentalNotFound: 該当する貸出がない
pub async fn load_rental(deps: &ServiceDependencies, rental_id: RentalId) -> Result<Rental> {
    deps.rental_store
        .get_by_id(rental_id)
        .await
        .map_err(RentalApplicationError::Store)?
        .ok_or(RentalApplicationError::RentalNotFound)
}

/// 映画を貸し出す
///
/// ビジネスルール（この順序で検証し、最初に該当したエラーを返す）：
/// 1. 映画が1本以上指定されていること
/// 2. 顧客が指定されていること
/// 3. 在庫切れの映画が含まれていないこと
/// 4. 信用照会が成功し、顧客がブラックリストに載っていないこと
///
/// 検証に失敗した場合、ストアへの保存は行わない。
/// 保存時のエラーはラップせずに呼び出し元へ返す。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `cmd` - 貸出コマンド
///
/// # 戻り値
/// 保存された貸出
pub async fn rent_movies(deps: &ServiceDependencies, cmd: RentMovies) -> Result<Rental> {
    let RentMovies { customer, movies } = cmd;

    // 1-3. 入力の検証
    let customer = domain::rental::validate_rental_request(customer.as_ref(), &movies)?.clone();

    // 4. 信用照会
    let denylisted = deps
        .credit_check
        .is_denylisted(&customer)
        .await
        .map_err(RentalApplicationError::CreditCheckUnavailable)?;

    if denylisted {
        tracing::warn!(
            customer_id = %customer.customer_id.value(),
            "Rental refused: customer is denylisted"
        );
        return Err(RentalApplicationError::CustomerBlacklisted);
    }

    // 5-6. 料金と返却期限を計算
    let rental = domain::rental::rent_movies(customer, movies, deps.clock.now(), &deps.policy)?;

    // 7. 保存
    deps.rental_store
        .save(rental.clone())
        .await
        .map_err(RentalApplicationError::Store)?;

    tracing::info!(
        rental_id = %rental.rental_id.value(),
        movies = rental.movies.len(),
        price = %rental.price,
        due_date = %rental.due_date,
        "Rental created"
    );

    Ok(rental)
}

/// 貸出を延長する
///
/// 料金を延長料金（単価 × 日数）で置き換え、貸出日を現在時刻、
/// 返却期限を現在時刻 + 日数にしてストアに1回保存する。
/// 保存に成功した場合のみ `rental` を更新する。
pub async fn extend_rental(
    deps: &ServiceDependencies,
    rental: &mut Rental,
    extra_days: RentalDays,
) -> Result<()> {
    let extended = domain::rental::extend_rental(rental, extra_days, deps.clock.now())?;

    deps.rental_store
        .save(extended.clone())
        .await
        .map_err(RentalApplicationError::Store)?;

    tracing::info!(
        rental_id = %extended.rental_id.value(),
        extra_days = extra_days.value(),
        price = %extended.price,
        due_date = %extended.due_date,
        "Rental extended"
    );

    *rental = extended;
    Ok(())
}

/// IDを指定して貸出を延長する
///
/// ストアから貸出を読み込んでから `extend_rental` を呼ぶ。
pub async fn extend_rental_by_id(
    deps: &ServiceDependencies,
    rental_id: RentalId,
    extra_days: RentalDays,
) -> Result<Rental> {
    let mut rental = load_rental(deps, rental_id).await?;
    extend_rental(deps, &mut rental, extra_days).await?;
    Ok(rental)
}
