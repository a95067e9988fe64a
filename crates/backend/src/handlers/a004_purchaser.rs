use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a004_purchaser::aggregate::{Purchaser, PurchaserDto};
use contracts::shared::query::{ListQuery, Page};

use super::parse_id;
use crate::domain::a004_purchaser::service;
use crate::shared::error::ApiResult;

/// GET /api/purchaser
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Json<Page<Purchaser>>> {
    Ok(Json(service::list(&query).await?))
}

/// GET /api/purchaser/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Purchaser>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/purchaser — 201 и созданная запись
pub async fn create(Json(dto): Json<PurchaserDto>) -> ApiResult<(StatusCode, Json<Purchaser>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/purchaser/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<PurchaserDto>,
) -> ApiResult<Json<Purchaser>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/purchaser/:id — 200 и удалённая запись, 409 при конфликте
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Purchaser>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
