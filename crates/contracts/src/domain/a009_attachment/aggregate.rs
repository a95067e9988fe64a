use crate::domain::a007_contract::aggregate::ContractId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор вложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentId(pub Uuid);

impl AttachmentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for AttachmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AttachmentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Файловое вложение (скан договора, счёт, акт).
///
/// `name` — отображаемое имя; `stored_path` заполняет сервер при загрузке.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(flatten)]
    pub base: BaseAggregate<AttachmentId>,

    #[serde(rename = "contractId")]
    pub contract_id: Option<ContractId>,

    #[serde(rename = "fileName")]
    pub file_name: String,

    #[serde(rename = "contentType")]
    pub content_type: String,

    #[serde(rename = "sizeBytes")]
    pub size_bytes: i64,

    #[serde(rename = "storedPath")]
    pub stored_path: String,
}

impl Attachment {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        name: String,
        contract_id: Option<ContractId>,
        file_name: String,
        content_type: String,
        size_bytes: i64,
        stored_path: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(AttachmentId::new_v4(), name);
        base.comment = comment;

        Self {
            base,
            contract_id,
            file_name,
            content_type,
            size_bytes,
            stored_path,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Переименование и привязка; сам файл после загрузки не меняется
    pub fn apply(&mut self, dto: &AttachmentDto, contract_id: Option<ContractId>) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.contract_id = contract_id;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Наименование не может быть пустым");
        }
        if self.file_name.trim().is_empty() {
            errors.add("fileName", "Имя файла не может быть пустым");
        }
        if self.size_bytes < 0 {
            errors.add("fileName", "Размер файла некорректен");
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Attachment {
    type Id = AttachmentId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "attachment"
    }

    fn element_name() -> &'static str {
        "Файл"
    }

    fn list_name() -> &'static str {
        "Файлы"
    }
}

/// DTO для переименования/привязки вложения (загрузка идёт отдельным multipart-запросом)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttachmentDto {
    pub id: Option<String>,
    pub name: String,

    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,

    pub comment: Option<String>,
}
