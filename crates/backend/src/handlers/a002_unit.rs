use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_unit::aggregate::{Unit, UnitDto};
use contracts::shared::query::{ListQuery, Page};

use super::parse_id;
use crate::domain::a002_unit::service;
use crate::shared::error::ApiResult;

/// GET /api/unit
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Json<Page<Unit>>> {
    Ok(Json(service::list(&query).await?))
}

/// GET /api/unit/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Unit>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/unit — 201 и созданная запись
pub async fn create(Json(dto): Json<UnitDto>) -> ApiResult<(StatusCode, Json<Unit>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/unit/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<UnitDto>) -> ApiResult<Json<Unit>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/unit/:id — 200 и удалённая запись, 409 при конфликте
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Unit>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
