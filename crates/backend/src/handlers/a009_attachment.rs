use axum::extract::{Multipart, Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a009_attachment::aggregate::{Attachment, AttachmentDto};
use contracts::shared::query::{ListQuery, Page};
use serde::Deserialize;

use super::{parse_id, parse_scope_id};
use crate::domain::a009_attachment::service;
use crate::shared::error::{ApiError, ApiResult};

/// Фиксированный фильтр области: файлы одного контракта
#[derive(Debug, Deserialize)]
pub struct ContractScope {
    #[serde(rename = "contractId")]
    contract_id: Option<String>,
}

/// GET /api/attachment[?contractId=...]
pub async fn list(
    Query(query): Query<ListQuery>,
    Query(scope): Query<ContractScope>,
) -> ApiResult<Json<Page<Attachment>>> {
    let contract_id = parse_scope_id(scope.contract_id.as_deref())?;
    Ok(Json(service::list(&query, contract_id).await?))
}

/// GET /api/attachment/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiResult<Json<Attachment>> {
    Ok(Json(service::get_by_id(parse_id(&id)?).await?))
}

/// POST /api/attachment/upload — multipart: поле `file` + необязательный `contractId`
pub async fn upload(mut multipart: Multipart) -> ApiResult<(StatusCode, Json<Attachment>)> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Vec<u8>> = None;
    let mut contract_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Некорректный multipart-запрос: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(str::to_string);
                content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Ошибка чтения файла: {e}")))?;
                data = Some(bytes.to_vec());
            }
            Some("contractId") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Ошибка чтения поля: {e}")))?;
                contract_id = Some(value);
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| ApiError::BadRequest("Поле file отсутствует".into()))?;
    let file_name =
        file_name.ok_or_else(|| ApiError::BadRequest("Имя файла отсутствует".into()))?;
    let content_type =
        content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    let created = service::upload(file_name, content_type, contract_id, data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/attachment/:id/download
pub async fn download(Path(id): Path<String>) -> ApiResult<Response> {
    let (attachment, data) = service::read_content(parse_id(&id)?).await?;

    let headers = [
        (header::CONTENT_TYPE, attachment.content_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", attachment.file_name),
        ),
    ];

    Ok((headers, data).into_response())
}

/// PATCH /api/attachment/:id — переименование/привязка
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<AttachmentDto>,
) -> ApiResult<Json<Attachment>> {
    Ok(Json(service::update(parse_id(&id)?, dto).await?))
}

/// DELETE /api/attachment/:id — 200 и удалённая запись
pub async fn delete(Path(id): Path<String>) -> ApiResult<Json<Attachment>> {
    Ok(Json(service::delete(parse_id(&id)?).await?))
}
