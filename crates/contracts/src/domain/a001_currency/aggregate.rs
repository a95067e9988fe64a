use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор валюты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyId(pub Uuid);

impl CurrencyId {
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

impl AggregateId for CurrencyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CurrencyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Валюта расчётов по контрактам
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    #[serde(flatten)]
    pub base: BaseAggregate<CurrencyId>,

    /// Буквенный код ISO 4217 ("RUB", "USD")
    pub code: String,
    /// Символ для отображения сумм ("₽", "$")
    pub symbol: String,
}

impl Currency {
    pub fn new_for_insert(name: String, code: String, symbol: String, comment: Option<String>) -> Self {
        let mut base = BaseAggregate::new(CurrencyId::new_v4(), name);
        base.comment = comment;

        Self { base, code, symbol }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn apply(&mut self, dto: &CurrencyDto) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.code = dto.code.trim().to_uppercase();
        self.symbol = dto.symbol.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Наименование не может быть пустым");
        }
        let code = self.code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            errors.add("code", "Код валюты — три латинские буквы (ISO 4217)");
        }
        if self.symbol.trim().is_empty() {
            errors.add("symbol", "Символ не может быть пустым");
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Currency {
    type Id = CurrencyId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "currency"
    }

    fn element_name() -> &'static str {
        "Валюта"
    }

    fn list_name() -> &'static str {
        "Валюты"
    }
}

/// DTO для создания/обновления валюты
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurrencyDto {
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub symbol: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_must_be_three_letters() {
        let mut currency =
            Currency::new_for_insert("Доллар США".into(), "USD".into(), "$".into(), None);
        assert!(currency.validate().is_ok());

        currency.code = "US".into();
        let errors = currency.validate().unwrap_err();
        assert!(errors.fields().contains_key("code"));

        currency.code = "U5D".into();
        assert!(currency.validate().is_err());
    }
}
