//! 環境変数からの設定読み込み

use chrono::Weekday;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{CustomerId, RentalPolicy};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// アプリケーション設定
///
/// - `DATABASE_URL`: 未設定ならインメモリのストアを使う
/// - `PORT`: 待ち受けポート（既定 3000）
/// - `RENTAL_OFF_DAY`: 返却日にできない曜日（既定 sunday）
/// - `DENYLIST`: ブラックリストの顧客ID（カンマ区切りのUUID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub port: u16,
    pub off_day: Weekday,
    pub denylist: Vec<CustomerId>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の取得関数から設定を組み立てる
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let off_day = match lookup("RENTAL_OFF_DAY") {
            Some(value) => value
                .trim()
                .parse::<Weekday>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "RENTAL_OFF_DAY",
                    value,
                })?,
            None => RentalPolicy::default().off_day,
        };

        let denylist = lookup("DENYLIST")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                Uuid::parse_str(id)
                    .map(CustomerId::from_uuid)
                    .map_err(|_| ConfigError::InvalidValue {
                        name: "DENYLIST",
                        value: id.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            database_url,
            port,
            off_day,
            denylist,
        })
    }

    pub fn rental_policy(&self) -> RentalPolicy {
        RentalPolicy {
            off_day: self.off_day,
        }
    }
}
