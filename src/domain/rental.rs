use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::{
    Customer, ExtendRentalError, Movie, Price, PriceError, RentMoviesError, RentalDays, RentalId,
};

/// 通常の貸出期間（日数）
pub const RENTAL_PERIOD_DAYS: i64 = 1;

/// 貸出ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPolicy {
    /// 返却日にできない曜日（定休日）
    pub off_day: Weekday,
}

impl Default for RentalPolicy {
    fn default() -> Self {
        Self {
            off_day: Weekday::Sun,
        }
    }
}

/// Rental集約 - 1人の顧客による1回の貸出（複数本）
///
/// 映画リストは貸出時点のスナップショット。カタログの変更は反映されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: RentalId,
    pub customer: Customer,
    pub movies: Vec<Movie>,
    pub price: Price,
    pub rented_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub returned: bool,
}

/// 何本目かに応じた課金率（%）
///
/// 1-2本目: 100%, 3本目: 75%, 4本目: 50%, 5本目: 25%, 6本目以降: 無料
fn charge_percent(position: usize) -> u32 {
    match position {
        1 | 2 => 100,
        3 => 75,
        4 => 50,
        5 => 25,
        _ => 0,
    }
}

/// 純粋関数：貸出料金を計算する
///
/// 割引は入力リストの順序（1始まり）で決まる。単価順の並べ替えはしない。
pub fn calculate_rental_price(movies: &[Movie]) -> Result<Price, PriceError> {
    movies
        .iter()
        .enumerate()
        .try_fold(Price::ZERO, |total, (index, movie)| {
            total.checked_add(movie.daily_price.percent_of(charge_percent(index + 1))?)
        })
}

/// 純粋関数：延長料金を計算する
///
/// 延長には本数割引を適用しない。各映画の単価 × 日数の合計。
pub fn calculate_extension_price(
    movies: &[Movie],
    extra_days: RentalDays,
) -> Result<Price, PriceError> {
    movies.iter().try_fold(Price::ZERO, |total, movie| {
        total.checked_add(movie.daily_price.times(extra_days.value())?)
    })
}

/// 純粋関数：返却期限を計算する
///
/// 貸出日の翌日。翌日が定休日なら、さらに1日後ろにずらす。
pub fn due_date_for(rented_at: DateTime<Utc>, policy: &RentalPolicy) -> DateTime<Utc> {
    let due_date = rented_at + Duration::days(RENTAL_PERIOD_DAYS);

    if due_date.weekday() == policy.off_day {
        due_date + Duration::days(1)
    } else {
        due_date
    }
}

/// 純粋関数：貸出リクエストを検証する
///
/// 外部サービス（信用照会）を呼ぶ前に行える検証のみ。
/// 成功時は検証済みの顧客を返す。
pub fn validate_rental_request<'a>(
    customer: Option<&'a Customer>,
    movies: &[Movie],
) -> Result<&'a Customer, RentMoviesError> {
    if movies.is_empty() {
        return Err(RentMoviesError::MissingMovie);
    }

    let customer = customer.ok_or(RentMoviesError::MissingCustomer)?;

    if let Some(movie) = movies.iter().find(|movie| movie.is_out_of_stock()) {
        return Err(RentMoviesError::OutOfStock {
            movie_id: movie.movie_id,
        });
    }

    Ok(customer)
}

/// 純粋関数：映画を貸し出す
///
/// 検証済みの入力から新しいRentalを組み立てる。副作用なし。
pub fn rent_movies(
    customer: Customer,
    movies: Vec<Movie>,
    rented_at: DateTime<Utc>,
    policy: &RentalPolicy,
) -> Result<Rental, RentMoviesError> {
    let price =
        calculate_rental_price(&movies).map_err(|_| RentMoviesError::PriceOutOfRange)?;

    Ok(Rental {
        rental_id: RentalId::new(),
        customer,
        movies,
        price,
        rented_at,
        due_date: due_date_for(rented_at, policy),
        returned: false,
    })
}

/// 純粋関数：貸出を延長する
///
/// ビジネスルール：
/// - 返却済みは延長不可
/// - 貸出日は延長時点、返却期限は延長時点 + 日数（定休日の補正なし）
/// - 料金は延長料金で置き換える
/// - 料金・返却期限が表現できる範囲を超える延長はエラー
pub fn extend_rental(
    rental: &Rental,
    extra_days: RentalDays,
    extended_at: DateTime<Utc>,
) -> Result<Rental, ExtendRentalError> {
    if rental.returned {
        return Err(ExtendRentalError::AlreadyReturned);
    }

    let price = calculate_extension_price(&rental.movies, extra_days)
        .map_err(|_| ExtendRentalError::PriceOutOfRange)?;
    let due_date = extended_at
        .checked_add_signed(Duration::days(i64::from(extra_days.value())))
        .ok_or(ExtendRentalError::DueDateOutOfRange)?;

    Ok(Rental {
        price,
        rented_at: extended_at,
        due_date,
        ..rental.clone()
    })
}

/// 純粋関数：延滞判定
pub fn is_overdue(rental: &Rental, now: DateTime<Utc>) -> bool {
    !rental.returned && rental.due_date < now
}
