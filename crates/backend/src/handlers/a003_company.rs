use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_company::aggregate::{Company, CompanyDto};
use contracts::shared::query::{ListQuery, Page};

use super::parse_id;
use crate::domain::a003_company::service;
use crate::shared::error::ApiResult;

/// GET /api/company
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Json<Page<Company>>> {
    Ok(Json(service::list(&query).await?))
}

/// GET /api/company/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Company>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/company — 201 и созданная запись
pub async fn create(Json(dto): Json<CompanyDto>) -> ApiResult<(StatusCode, Json<Company>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/company/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<CompanyDto>,
) -> ApiResult<Json<Company>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/company/:id — 200 и удалённая запись, 409 при конфликте
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Company>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
