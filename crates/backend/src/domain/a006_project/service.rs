use super::repository;
use crate::domain::{a004_purchaser, a007_contract};
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a004_purchaser::aggregate::PurchaserId;
use contracts::domain::a006_project::aggregate::{Project, ProjectDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

pub async fn list(query: &ListQuery) -> ApiResult<Page<Project>> {
    Ok(repository::list_page(query).await?)
}

pub async fn get_by_id(id: Uuid) -> ApiResult<Project> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

/// Разобрать необязательную ссылку на покупателя
async fn resolve_purchaser(dto: &ProjectDto) -> ApiResult<Option<PurchaserId>> {
    let raw = match dto.purchaser_id.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    let uuid = Uuid::parse_str(raw)
        .map_err(|_| ApiError::field("purchaserId", "Некорректная ссылка на покупателя"))?;

    if !a004_purchaser::repository::exists_active(uuid).await? {
        return Err(ApiError::field("purchaserId", "Покупатель не найден"));
    }

    Ok(Some(PurchaserId::new(uuid)))
}

pub async fn create(dto: ProjectDto) -> ApiResult<Project> {
    let purchaser_id = resolve_purchaser(&dto).await?;

    let mut aggregate =
        Project::new_for_insert(dto.name.clone(), purchaser_id, dto.comment.clone());

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: ProjectDto) -> ApiResult<Project> {
    let purchaser_id = resolve_purchaser(&dto).await?;

    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto, purchaser_id);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление; проект с контрактами не удаляется
pub async fn delete(id: Uuid) -> ApiResult<Project> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let used_by = a007_contract::repository::count_active_by_project(id).await?;
    if used_by > 0 {
        return Err(ApiError::Conflict(format!(
            "Проект содержит контракты ({})",
            used_by
        )));
    }

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}
