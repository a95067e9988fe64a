use super::repository;
use crate::domain::{a001_currency, a003_company, a004_purchaser, a006_project, a008_payment, a009_attachment};
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a001_currency::aggregate::CurrencyId;
use contracts::domain::a003_company::aggregate::CompanyId;
use contracts::domain::a004_purchaser::aggregate::PurchaserId;
use contracts::domain::a006_project::aggregate::ProjectId;
use contracts::domain::a007_contract::aggregate::{Contract, ContractDto, ContractRefs};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

pub async fn list(query: &ListQuery, project_id: Option<Uuid>) -> ApiResult<Page<Contract>> {
    Ok(repository::list_page(query, project_id).await?)
}

pub async fn get_by_id(id: Uuid) -> ApiResult<Contract> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

/// Разобрать и проверить все ссылки контракта на справочники
async fn resolve_refs(dto: &ContractDto) -> ApiResult<ContractRefs> {
    let project_uuid = Uuid::parse_str(dto.project_id.trim())
        .map_err(|_| ApiError::field("projectId", "Не выбран проект"))?;
    if !a006_project::repository::exists_active(project_uuid).await? {
        return Err(ApiError::field("projectId", "Проект не найден"));
    }

    let company_uuid = Uuid::parse_str(dto.company_id.trim())
        .map_err(|_| ApiError::field("companyId", "Не выбрана компания"))?;
    if !a003_company::repository::exists_active(company_uuid).await? {
        return Err(ApiError::field("companyId", "Компания не найдена"));
    }

    let purchaser_uuid = Uuid::parse_str(dto.purchaser_id.trim())
        .map_err(|_| ApiError::field("purchaserId", "Не выбран покупатель"))?;
    if !a004_purchaser::repository::exists_active(purchaser_uuid).await? {
        return Err(ApiError::field("purchaserId", "Покупатель не найден"));
    }

    let currency_uuid = Uuid::parse_str(dto.currency_id.trim())
        .map_err(|_| ApiError::field("currencyId", "Не выбрана валюта"))?;
    if !a001_currency::repository::exists_active(currency_uuid).await? {
        return Err(ApiError::field("currencyId", "Валюта не найдена"));
    }

    Ok(ContractRefs {
        project_id: ProjectId::new(project_uuid),
        company_id: CompanyId::new(company_uuid),
        purchaser_id: PurchaserId::new(purchaser_uuid),
        currency_id: CurrencyId::new(currency_uuid),
    })
}

/// "YYYY-MM-DD" либо пустая строка (контракт ещё не подписан)
fn parse_signed_at(dto: &ContractDto) -> ApiResult<Option<chrono::NaiveDate>> {
    let raw = dto.signed_at.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ApiError::field("signedAt", "Дата подписания в формате ГГГГ-ММ-ДД"))
}

pub async fn create(dto: ContractDto) -> ApiResult<Contract> {
    let refs = resolve_refs(&dto).await?;
    let signed_at = parse_signed_at(&dto)?;

    let mut aggregate = Contract::new_for_insert(
        dto.name.clone(),
        dto.number.clone(),
        refs,
        dto.amount,
        signed_at,
        dto.comment.clone(),
    );

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: ContractDto) -> ApiResult<Contract> {
    let refs = resolve_refs(&dto).await?;
    let signed_at = parse_signed_at(&dto)?;

    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto, refs, signed_at);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление; контракт с платежами или файлами не удаляется
pub async fn delete(id: Uuid) -> ApiResult<Contract> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    let payments = a008_payment::repository::count_active_by_contract(id).await?;
    if payments > 0 {
        return Err(ApiError::Conflict(format!(
            "По контракту есть платежи ({})",
            payments
        )));
    }

    let attachments = a009_attachment::repository::count_active_by_contract(id).await?;
    if attachments > 0 {
        return Err(ApiError::Conflict(format!(
            "К контракту привязаны файлы ({})",
            attachments
        )));
    }

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}
