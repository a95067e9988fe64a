use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a008_payment::aggregate::{Payment, PaymentDto};
use contracts::domain::a008_payment::summary;
use contracts::shared::query::{ListQuery, Page};
use serde::Deserialize;
use serde_json::json;

use super::{parse_id, parse_scope_id};
use crate::domain::a008_payment::service;
use crate::shared::error::ApiResult;

/// Фиксированный фильтр области: платежи одного контракта
#[derive(Debug, Deserialize)]
pub struct ContractScope {
    #[serde(rename = "contractId")]
    contract_id: Option<String>,
}

/// GET /api/payment[?contractId=...]
pub async fn list(
    Query(query): Query<ListQuery>,
    Query(scope): Query<ContractScope>,
) -> ApiResult<Json<Page<Payment>>> {
    let contract_id = parse_scope_id(scope.contract_id.as_deref())?;
    Ok(Json(service::list(&query, contract_id).await?))
}

/// GET /api/payment/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Payment>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/payment — 201 и созданная запись
pub async fn create(Json(dto): Json<PaymentDto>) -> ApiResult<(StatusCode, Json<Payment>)> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/payment/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<PaymentDto>,
) -> ApiResult<Json<Payment>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/payment/:id — 200 и удалённая запись
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Payment>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}

/// GET /api/contract/:id/payments-summary — сводка оплат контракта
pub async fn contract_summary(Path(id): Path<String>) -> ApiResult<Json<serde_json::Value>> {
    let (contract, payments) = service::contract_summary(parse_id(&id)?).await?;

    let paid_total = summary::paid_total(&payments);
    let remaining = summary::remaining(contract.amount, &payments);
    let percent_paid = summary::percent_paid(contract.amount, &payments);

    Ok(Json(json!({
        "contractAmount": contract.amount,
        "paidTotal": paid_total,
        "remaining": remaining,
        "percentPaid": percent_paid,
        "paymentsCount": payments.len(),
    })))
}
