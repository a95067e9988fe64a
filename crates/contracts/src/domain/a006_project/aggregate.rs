use crate::domain::a004_purchaser::aggregate::PurchaserId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор проекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
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

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Проект — группа контрактов одного заказчика
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub base: BaseAggregate<ProjectId>,

    #[serde(rename = "purchaserId")]
    pub purchaser_id: Option<PurchaserId>,
}

impl Project {
    pub fn new_for_insert(
        name: String,
        purchaser_id: Option<PurchaserId>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProjectId::new_v4(), name);
        base.comment = comment;

        Self { base, purchaser_id }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO (purchaser_id уже разобран сервисом)
    pub fn apply(&mut self, dto: &ProjectDto, purchaser_id: Option<PurchaserId>) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.purchaser_id = purchaser_id;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Наименование не может быть пустым");
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "project"
    }

    fn element_name() -> &'static str {
        "Проект"
    }

    fn list_name() -> &'static str {
        "Проекты"
    }
}

/// DTO для создания/обновления проекта
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectDto {
    pub id: Option<String>,
    pub name: String,

    #[serde(rename = "purchaserId")]
    pub purchaser_id: Option<String>,

    pub comment: Option<String>,
}
