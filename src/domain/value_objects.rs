use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 貸出ID - レンタル集約のID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalId(Uuid);

impl RentalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for RentalId {
    fn default() -> Self {
        Self::new()
    }
}

/// 顧客ID - 顧客管理コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

/// 映画ID - カタログコンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

/// 金額エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// 負の金額
    #[error("Price must not be negative: {0}")]
    Negative(Decimal),

    /// 計算結果がDecimalの範囲を超えた
    #[error("Price out of range")]
    Overflow,
}

/// 金額
///
/// 不変条件：0以上。
/// 型システムで負の値を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// 指定パーセント分の金額（0%以上なので非負のまま）
    ///
    /// 率（percent / 100）を掛ける。範囲を超えたら `Overflow`。
    pub fn percent_of(self, percent: u32) -> Result<Self, PriceError> {
        let rate = Decimal::from(percent) / Decimal::ONE_HUNDRED;
        self.0
            .checked_mul(rate)
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    /// n倍の金額
    pub fn times(self, n: u32) -> Result<Self, PriceError> {
        self.0
            .checked_mul(Decimal::from(n))
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    pub fn checked_add(self, other: Price) -> Result<Self, PriceError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(PriceError::Overflow)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PriceError::Negative(value));
        }
        Ok(Self(value))
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 日数エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalDaysError {
    /// 0日は指定できない
    #[error("Rental days must be at least 1")]
    Zero,
}

/// 貸出日数（延長日数）
///
/// 不変条件：1日以上。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RentalDays(u32);

impl RentalDays {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RentalDays {
    type Error = RentalDaysError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(RentalDaysError::Zero);
        }
        Ok(Self(value))
    }
}

impl From<RentalDays> for u32 {
    fn from(days: RentalDays) -> Self {
        days.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_zero_and_positive() {
        assert_eq!(Price::try_from(Decimal::ZERO).unwrap(), Price::ZERO);
        let price = Price::try_from(Decimal::new(45, 1)).unwrap();
        assert_eq!(price.value(), Decimal::new(45, 1));
    }

    #[test]
    fn test_price_rejects_negative() {
        let result = Price::try_from(Decimal::new(-1, 0));
        assert_eq!(result.unwrap_err(), PriceError::Negative(Decimal::new(-1, 0)));
    }

    #[test]
    fn test_price_deserialize_rejects_negative() {
        let result: Result<Price, _> = serde_json::from_str("\"-2.5\"");
        assert!(result.is_err());

        let price: Price = serde_json::from_str("\"2.5\"").unwrap();
        assert_eq!(price.value(), Decimal::new(25, 1));
    }

    #[test]
    fn test_price_arithmetic() {
        let price = Price::try_from(Decimal::from(4)).unwrap();

        assert_eq!(price.percent_of(75).unwrap().value(), Decimal::from(3));
        assert_eq!(price.percent_of(0).unwrap(), Price::ZERO);
        assert_eq!(price.times(3).unwrap().value(), Decimal::from(12));
        assert_eq!(price.checked_add(price).unwrap().value(), Decimal::from(8));
    }

    #[test]
    fn test_price_at_decimal_max_is_charged_in_full() {
        let price = Price::try_from(Decimal::MAX).unwrap();

        assert_eq!(price.percent_of(100).unwrap(), price);
        assert_eq!(price.times(1).unwrap(), price);
    }

    #[test]
    fn test_price_overflow_is_an_error() {
        let price = Price::try_from(Decimal::MAX).unwrap();
        let one = Price::try_from(Decimal::ONE).unwrap();

        assert_eq!(price.times(2).unwrap_err(), PriceError::Overflow);
        assert_eq!(price.checked_add(one).unwrap_err(), PriceError::Overflow);
    }

    #[test]
    fn test_rental_days_rejects_zero() {
        assert_eq!(RentalDays::try_from(0).unwrap_err(), RentalDaysError::Zero);
        assert_eq!(RentalDays::try_from(3).unwrap().value(), 3);
    }

    #[test]
    fn test_rental_id_creation() {
        let id1 = RentalId::new();
        let id2 = RentalId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_customer_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = CustomerId::from_uuid(uuid);
        assert_eq!(id.value(), uuid);
    }

    #[test]
    fn test_movie_id_creation() {
        let id1 = MovieId::new();
        let id2 = MovieId::new();
        assert_ne!(id1, id2);
    }
}
