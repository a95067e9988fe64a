use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a006_project::aggregate::{Project, ProjectDto};
use contracts::shared::query::{ListQuery, Page};

use super::parse_id;
use crate::domain::a006_project::service;
use crate::shared::error::ApiResult;

/// GET /api/project
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Json<Page<Project>>> {
    Ok(Json(service::list(&query).await?))
}

/// GET /api/project/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Project>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/project — 201 и созданная запись
pub async fn create(Json(dto): Json<ProjectDto>) -> ApiResult<(StatusCode, Json<Project>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/project/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProjectDto>,
) -> ApiResult<Json<Project>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/project/:id — 200 и удалённая запись, 409 при конфликте
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Project>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
