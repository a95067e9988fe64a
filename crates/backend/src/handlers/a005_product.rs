use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a005_product::aggregate::{Product, ProductDto};
use contracts::shared::query::{ListQuery, Page};

use super::parse_id;
use crate::domain::a005_product::service;
use crate::shared::error::ApiResult;

/// GET /api/product
pub async fn list(Query(query): Query<ListQuery>) -> ApiResult<Json<Page<Product>>> {
    Ok(Json(service::list(&query).await?))
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Product>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/product — 201 и созданная запись
pub async fn create(Json(dto): Json<ProductDto>) -> ApiResult<(StatusCode, Json<Product>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/product/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProductDto>,
) -> ApiResult<Json<Product>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/product/:id — 200 и удалённая запись
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Product>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
