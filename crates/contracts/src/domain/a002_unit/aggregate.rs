use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор единицы измерения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
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

impl AggregateId for UnitId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UnitId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Единица измерения номенклатуры ("Килограмм" / "кг")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    #[serde(flatten)]
    pub base: BaseAggregate<UnitId>,

    pub symbol: String,
}

impl Unit {
    pub fn new_for_insert(name: String, symbol: String, comment: Option<String>) -> Self {
        let mut base = BaseAggregate::new(UnitId::new_v4(), name);
        base.comment = comment;

        Self { base, symbol }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn apply(&mut self, dto: &UnitDto) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.symbol = dto.symbol.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Наименование не может быть пустым");
        }
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            errors.add("symbol", "Обозначение не может быть пустым");
        } else if symbol.chars().count() > 8 {
            errors.add("symbol", "Обозначение не длиннее 8 символов");
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Unit {
    type Id = UnitId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "unit"
    }

    fn element_name() -> &'static str {
        "Единица измерения"
    }

    fn list_name() -> &'static str {
        "Единицы измерения"
    }
}

/// DTO для создания/обновления единицы измерения
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UnitDto {
    pub id: Option<String>,
    pub name: String,
    pub symbol: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_requires_name_and_symbol() {
        let unit = Unit::new_for_insert("Килограмм".into(), "кг".into(), None);
        assert!(unit.validate().is_ok());

        let empty = Unit::new_for_insert("".into(), "".into(), None);
        let errors = empty.validate().unwrap_err();
        assert!(errors.fields().contains_key("name"));
        assert!(errors.fields().contains_key("symbol"));
    }

    #[test]
    fn unit_symbol_is_limited_to_eight_chars() {
        let unit = Unit::new_for_insert("Погонный метр".into(), "пог.метр.х".into(), None);
        assert!(unit.validate().is_err());
    }
}
