use super::repository;
use crate::domain::{a006_project, a007_contract};
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a004_purchaser::aggregate::{Purchaser, PurchaserDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

pub async fn list(query: &ListQuery) -> ApiResult<Page<Purchaser>> {
    Ok(repository::list_page(query).await?)
}

pub async fn get_by_id(id: Uuid) -> ApiResult<Purchaser> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

pub async fn create(dto: PurchaserDto) -> ApiResult<Purchaser> {
    let mut aggregate = Purchaser::new_for_insert(
        dto.name.clone(),
        dto.contact_person.clone(),
        dto.phone.clone(),
        dto.email.clone(),
        dto.comment.clone(),
    );

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: PurchaserDto) -> ApiResult<Purchaser> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление; покупатель, на которого ссылаются проекты или контракты,
/// не удаляется
pub async fn delete(id: Uuid) -> ApiResult<Purchaser> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let in_contracts = a007_contract::repository::count_active_by_purchaser(id).await?;
    if in_contracts > 0 {
        return Err(ApiError::Conflict(format!(
            "Покупатель используется в контрактах ({})",
            in_contracts
        )));
    }

    let in_projects = a006_project::repository::count_active_by_purchaser(id).await?;
    if in_projects > 0 {
        return Err(ApiError::Conflict(format!(
            "Покупатель используется в проектах ({})",
            in_projects
        )));
    }

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}
