use crate::application::rental::{
    ServiceDependencies, extend_rental_by_id, load_rental, notify_overdue_rentals, rent_movies,
};
use crate::domain::RentalId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{ExtendRentalRequest, OverdueNotificationResponse, RentMoviesRequest, RentalResponse},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// POST /rentals - 新しい貸出を作成
///
/// 強制されるビジネスルール:
/// - 映画・顧客が指定されていること
/// - 在庫切れの映画が含まれていないこと
/// - 顧客がブラックリストに載っていないこと
pub async fn create_rental(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RentMoviesRequest>,
) -> Result<(StatusCode, Json<RentalResponse>), ApiError> {
    let rental = rent_movies(&state.service_deps, req.to_command()).await?;

    Ok((StatusCode::CREATED, Json(RentalResponse::from(rental))))
}

/// GET /rentals/:id - 貸出詳細をIDで取得
pub async fn get_rental(
    State(state): State<Arc<AppState>>,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<RentalResponse>, ApiError> {
    let rental = load_rental(&state.service_deps, RentalId::from_uuid(rental_id)).await?;

    Ok(Json(RentalResponse::from(rental)))
}

/// POST /rentals/:id/extend - 貸出を延長
///
/// 料金は単価 × 延長日数で再計算され、返却期限は現在時刻 + 延長日数になる。
pub async fn extend_rental(
    State(state): State<Arc<AppState>>,
    Path(rental_id): Path<Uuid>,
    Json(req): Json<ExtendRentalRequest>,
) -> Result<Json<RentalResponse>, ApiError> {
    let rental = extend_rental_by_id(
        &state.service_deps,
        RentalId::from_uuid(rental_id),
        req.extra_days,
    )
    .await?;

    Ok(Json(RentalResponse::from(rental)))
}

/// POST /rentals/overdue-notifications - 延滞通知バッチを実行
pub async fn notify_overdue(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OverdueNotificationResponse>, ApiError> {
    let report = notify_overdue_rentals(&state.service_deps).await?;

    Ok(Json(OverdueNotificationResponse::from(report)))
}
