use super::repository;
use crate::domain::a007_contract;
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a001_currency::aggregate::{Currency, CurrencyDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

/// Список валют постранично
pub async fn list(query: &ListQuery) -> ApiResult<Page<Currency>> {
    Ok(repository::list_page(query).await?)
}

/// Получение валюты по ID
pub async fn get_by_id(id: Uuid) -> ApiResult<Currency> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

/// Создание новой валюты
pub async fn create(dto: CurrencyDto) -> ApiResult<Currency> {
    let mut aggregate = Currency::new_for_insert(
        dto.name.clone(),
        dto.code.trim().to_uppercase(),
        dto.symbol.clone(),
        dto.comment.clone(),
    );

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Обновление существующей валюты
pub async fn update(id: Uuid, dto: CurrencyDto) -> ApiResult<Currency> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление; валюта, на которую ссылаются контракты, не удаляется
pub async fn delete(id: Uuid) -> ApiResult<Currency> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let used_by = a007_contract::repository::count_active_by_currency(id).await?;
    if used_by > 0 {
        return Err(ApiError::Conflict(format!(
            "Валюта используется в контрактах ({})",
            used_by
        )));
    }

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}
