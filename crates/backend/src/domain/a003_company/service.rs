use super::repository;
use crate::domain::a007_contract;
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a003_company::aggregate::{Company, CompanyDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

pub async fn list(query: &ListQuery) -> ApiResult<Page<Company>> {
    Ok(repository::list_page(query).await?)
}

pub async fn get_by_id(id: Uuid) -> ApiResult<Company> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

pub async fn create(dto: CompanyDto) -> ApiResult<Company> {
    let mut aggregate = Company::new_for_insert(
        dto.name.clone(),
        dto.full_name.clone(),
        dto.inn.clone(),
        dto.kpp.clone(),
        dto.address.clone(),
        dto.comment.clone(),
    );

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: CompanyDto) -> ApiResult<Company> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление; компания-сторона действующих контрактов не удаляется
pub async fn delete(id: Uuid) -> ApiResult<Company> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let used_by = a007_contract::repository::count_active_by_company(id).await?;
    if used_by > 0 {
        return Err(ApiError::Conflict(format!(
            "Компания используется в контрактах ({})",
            used_by
        )));
    }

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}
