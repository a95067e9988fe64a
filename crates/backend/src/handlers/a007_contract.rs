use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a007_contract::aggregate::{Contract, ContractDto};
use contracts::shared::query::{ListQuery, Page};
use serde::Deserialize;

use super::{parse_id, parse_scope_id};
use crate::domain::a007_contract::service;
use crate::shared::error::ApiResult;

/// Фиксированный фильтр области: контракты одного проекта
#[derive(Debug, Deserialize)]
pub struct ProjectScope {
    #[serde(rename = "projectId")]
    project_id: Option<String>,
}

/// GET /api/contract[?projectId=...]
pub async fn list(
    Query(query): Query<ListQuery>,
    Query(scope): Query<ProjectScope>,
) -> ApiResult<Json<Page<Contract>>> {
    let project_id = parse_scope_id(scope.project_id.as_deref())?;
    Ok(Json(service::list(&query, project_id).await?))
}

/// GET /api/contract/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Contract>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/contract — 201 и созданная запись
pub async fn create(Json(dto): Json<ContractDto>) -> ApiResult<(StatusCode, Json<Contract>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/contract/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ContractDto>,
) -> ApiResult<Json<Contract>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/contract/:id — 200 и удалённая запись, 409 при конфликте
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Contract>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
