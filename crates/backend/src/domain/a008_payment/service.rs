use super::repository;
use crate::domain::a007_contract;
use crate::shared::error::{ApiError, ApiResult};
use contracts::domain::a007_contract::aggregate::ContractId;
use contracts::domain::a008_payment::aggregate::{Payment, PaymentDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

pub async fn list(query: &ListQuery, contract_id: Option<Uuid>) -> ApiResult<Page<Payment>> {
    Ok(repository::list_page(query, contract_id).await?)
}

pub async fn get_by_id(id: Uuid) -> ApiResult<Payment> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

/// Разобрать и проверить ссылку на контракт
async fn resolve_contract(dto: &PaymentDto) -> ApiResult<ContractId> {
    let uuid = Uuid::parse_str(dto.contract_id.trim())
        .map_err(|_| ApiError::field("contractId", "Не выбран контракт"))?;

    if !a007_contract::repository::exists_active(uuid).await? {
        return Err(ApiError::field("contractId", "Контракт не найден"));
    }

    Ok(ContractId::new(uuid))
}

fn parse_paid_at(dto: &PaymentDto) -> ApiResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(dto.paid_at.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::field("paidAt", "Дата платежа в формате ГГГГ-ММ-ДД"))
}

pub async fn create(dto: PaymentDto) -> ApiResult<Payment> {
    let contract_id = resolve_contract(&dto).await?;
    let paid_at = parse_paid_at(&dto)?;

    let mut aggregate = Payment::new_for_insert(
        dto.name.clone(),
        contract_id,
        dto.amount,
        paid_at,
        dto.comment.clone(),
    );

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: PaymentDto) -> ApiResult<Payment> {
    let contract_id = resolve_contract(&dto).await?;
    let paid_at = parse_paid_at(&dto)?;

    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto, contract_id, paid_at);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> ApiResult<Payment> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(aggregate)
}

/// Сводка оплат контракта: сумма, оплачено, остаток, процент
pub async fn contract_summary(
    contract_id: Uuid,
) -> ApiResult<(contracts::domain::a007_contract::aggregate::Contract, Vec<Payment>)> {
    let contract = a007_contract::repository::get_by_id(contract_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    let payments = repository::list_by_contract(contract_id).await?;
    Ok((contract, payments))
}
