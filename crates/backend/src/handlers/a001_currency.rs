use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_currency::aggregate::{Currency, CurrencyDto};
use contracts::shared::query::{ListQuery, Page};

use super::parse_id;
use crate::domain::a001_currency::service;
use crate::shared::error::ApiResult;

/// GET /api/currency
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Json<Page<Currency>>> {
    Ok(Json(service::list(&query).await?))
}

/// GET /api/currency/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Currency>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/currency — 201 и созданная запись
pub async fn create(Json(dto): Json<CurrencyDto>) -> ApiResult<(StatusCode, Json<Currency>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/currency/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<CurrencyDto>,
) -> ApiResult<Json<Currency>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/currency/:id — 200 и удалённая запись, 409 при конфликте
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Currency>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
