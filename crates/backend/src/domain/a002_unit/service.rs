use super::repository;
use crate::domain::a005_product;
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a002_unit::aggregate::{Unit, UnitDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

/// Список единиц измерения постранично
pub async fn list(query: &ListQuery) -> ApiResult<Page<Unit>> {
    Ok(repository::list_page(query).await?)
}

/// Получение единицы измерения по ID
pub async fn get_by_id(id: Uuid) -> ApiResult<Unit> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

/// Создание новой единицы измерения
pub async fn create(dto: UnitDto) -> ApiResult<Unit> {
    let mut aggregate =
        Unit::new_for_insert(dto.name.clone(), dto.symbol.clone(), dto.comment.clone());

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Обновление существующей единицы измерения
pub async fn update(id: Uuid, dto: UnitDto) -> ApiResult<Unit> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление; единица, на которую ссылаются товары, не удаляется
pub async fn delete(id: Uuid) -> ApiResult<Unit> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let used_by = a005_product::repository::count_active_by_unit(id).await?;
    if used_by > 0 {
        return Err(ApiError::Conflict(format!(
            "Единица измерения используется в товарах ({})",
            used_by
        )));
    }

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}
