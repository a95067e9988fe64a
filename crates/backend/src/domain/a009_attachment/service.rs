use super::repository;
use crate::domain::a007_contract;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::storage;
use contracts::domain::a007_contract::aggregate::ContractId;
use contracts::domain::a009_attachment::aggregate::{Attachment, AttachmentDto};
use contracts::shared::query::{ListQuery, Page};
use uuid::Uuid;

pub async fn list(query: &ListQuery, contract_id: Option<Uuid>) -> ApiResult<Page<Attachment>> {
    Ok(repository::list_page(query, contract_id).await?)
}

pub async fn get_by_id(id: Uuid) -> ApiResult<Attachment> {
    repository::get_by_id(id).await?.ok_or(ApiError::NotFound)
}

/// Разобрать необязательную ссылку на контракт
async fn resolve_contract(raw: Option<&str>) -> ApiResult<Option<ContractId>> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    let uuid = Uuid::parse_str(raw)
        .map_err(|_| ApiError::field("contractId", "Некорректная ссылка на контракт"))?;

    if !a007_contract::repository::exists_active(uuid).await? {
        return Err(ApiError::field("contractId", "Контракт не найден"));
    }

    Ok(Some(ContractId::new(uuid)))
}

/// Принять загруженный файл: записать на диск и завести запись
pub async fn upload(
    file_name: String,
    content_type: String,
    contract_id: Option<String>,
    data: Vec<u8>,
) -> ApiResult<Attachment> {
    if file_name.trim().is_empty() {
        return Err(ApiError::field("fileName", "Имя файла не может быть пустым"));
    }
    if data.is_empty() {
        return Err(ApiError::field("fileName", "Пустой файл"));
    }

    let contract_ref = resolve_contract(contract_id.as_deref()).await?;

    // Файл кладётся под собственным uuid, расширение сохраняется
    let id = Uuid::new_v4();
    let extension = std::path::Path::new(&file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    let stored_name = format!("{}.{}", id, extension);
    let stored_path = storage::attachments_dir().join(&stored_name);

    let size_bytes = data.len() as i64;
    std::fs::write(&stored_path, data)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to store file: {e}")))?;

    let mut aggregate = Attachment::new_for_insert(
        file_name.clone(),
        contract_ref,
        file_name,
        content_type,
        size_bytes,
        stored_name,
        None,
    );

    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Содержимое файла для выгрузки
pub async fn read_content(id: Uuid) -> ApiResult<(Attachment, Vec<u8>)> {
    let aggregate = get_by_id(id).await?;
    let path = storage::attachments_dir().join(&aggregate.stored_path);
    let data = std::fs::read(&path)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to read stored file: {e}")))?;
    Ok((aggregate, data))
}

/// Переименование/привязка (сам файл не меняется)
pub async fn update(id: Uuid, dto: AttachmentDto) -> ApiResult<Attachment> {
    let contract_ref = resolve_contract(dto.contract_id.as_deref()).await?;

    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply(&dto, contract_ref);
    aggregate.validate().map_err(ApiError::Validation)?;
    aggregate.base.metadata.increment_version();
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Удаление записи вместе с файлом на диске
pub async fn delete(id: Uuid) -> ApiResult<Attachment> {
    let aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    if !repository::soft_delete(id).await? {
        return Err(ApiError::NotFound);
    }

    // Файл убирается best-effort: запись уже помечена удалённой
    let path = storage::attachments_dir().join(&aggregate.stored_path);
    if let Err(e) = std::fs::remove_file(&path) {
        tracing::warn!("Failed to remove stored file {}: {}", path.display(), e);
    }

    Ok(aggregate)
}
