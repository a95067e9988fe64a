pub mod a001_currency;
pub mod a002_unit;
pub mod a003_company;
pub mod a004_purchaser;
pub mod a005_product;
pub mod a006_project;
pub mod a007_contract;
pub mod a008_payment;
pub mod a009_attachment;

use crate::shared::error::{ApiError, ApiResult};
use uuid::Uuid;

/// Идентификатор из сегмента пути
pub(crate) fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::BadRequest("Некорректный идентификатор".into()))
}

/// Необязательный идентификатор области из строки запроса
pub(crate) fn parse_scope_id(raw: Option<&str>) -> ApiResult<Option<Uuid>> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| ApiError::BadRequest("Некорректный фильтр области".into())),
        _ => Ok(None),
    }
}
