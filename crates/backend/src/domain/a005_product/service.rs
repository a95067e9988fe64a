use super::repository;
use crate::domain::a002_unit;
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a002_unit::aggregate::UnitId;
use contracts::domain::a005_product::aggregate::{Product, ProductDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

pub async fn list(query: &ListQuery) -> ApiResult<Page<Product>> {
    Ok(repository::list_page(query).await?)
}

pub async fn get_by_id(id: Uuid) -> ApiResult<Product> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

/// Разобрать и проверить ссылку на единицу измерения
async fn resolve_unit(dto: &ProductDto) -> ApiResult<UnitId> {
    let unit_uuid = Uuid::parse_str(dto.unit_id.trim())
        .map_err(|_| ApiError::field("unitId", "Не выбрана единица измерения"))?;

    if !a002_unit::repository::exists_active(unit_uuid).await? {
        return Err(ApiError::field("unitId", "Единица измерения не найдена"));
    }

    Ok(UnitId::new(unit_uuid))
}

pub async fn create(dto: ProductDto) -> ApiResult<Product> {
    let unit_id = resolve_unit(&dto).await?;

    let mut aggregate = Product::new_for_insert(
        dto.name.clone(),
        dto.sku.clone(),
        unit_id,
        dto.price,
        dto.quantity,
        dto.comment.clone(),
    );

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: ProductDto) -> ApiResult<Product> {
    let unit_id = resolve_unit(&dto).await?;

    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto, unit_id);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> ApiResult<Product> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}
