use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор компании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
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

impl AggregateId for CompanyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CompanyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Компания-исполнитель (юридическое лицо или ИП)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    #[serde(flatten)]
    pub base: BaseAggregate<CompanyId>,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub inn: String,
    pub kpp: String,
    pub address: String,
}

impl Company {
    pub fn new_for_insert(
        name: String,
        full_name: String,
        inn: String,
        kpp: String,
        address: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(CompanyId::new_v4(), name);
        base.comment = comment;

        Self {
            base,
            full_name,
            inn,
            kpp,
            address,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn apply(&mut self, dto: &CompanyDto) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.full_name = dto.full_name.clone();
        self.inn = dto.inn.clone();
        self.kpp = dto.kpp.clone();
        self.address = dto.address.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Наименование не может быть пустым");
        }
        if self.full_name.trim().is_empty() {
            errors.add("fullName", "Полное наименование не может быть пустым");
        }

        // ИНН: 10 цифр для ЮЛ, 12 для ИП; пустой допускаем для черновиков
        if !self.inn.trim().is_empty() {
            let inn_digits: String = self.inn.chars().filter(|c| c.is_ascii_digit()).collect();
            if inn_digits.len() != 10 && inn_digits.len() != 12 {
                errors.add("inn", "ИНН должен содержать 10 цифр (для ЮЛ) или 12 цифр (для ИП)");
            }
        }

        // КПП: 9 цифр или пусто (для ИП)
        if !self.kpp.trim().is_empty() {
            let kpp_digits: String = self.kpp.chars().filter(|c| c.is_ascii_digit()).collect();
            if kpp_digits.len() != 9 {
                errors.add("kpp", "КПП должен содержать 9 цифр или быть пустым (для ИП)");
            }
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Company {
    type Id = CompanyId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "company"
    }

    fn element_name() -> &'static str {
        "Компания"
    }

    fn list_name() -> &'static str {
        "Компании"
    }
}

/// DTO для создания/обновления компании
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompanyDto {
    pub id: Option<String>,
    pub name: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub inn: String,
    pub kpp: String,
    pub address: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(inn: &str, kpp: &str) -> Company {
        Company::new_for_insert(
            "ООО \"Ромашка\"".into(),
            "Общество с ограниченной ответственностью \"Ромашка\"".into(),
            inn.into(),
            kpp.into(),
            "г. Москва".into(),
            None,
        )
    }

    #[test]
    fn inn_accepts_10_or_12_digits_or_empty() {
        assert!(company("7701234567", "770101001").validate().is_ok());
        assert!(company("771234567890", "").validate().is_ok());
        assert!(company("", "").validate().is_ok());

        let errors = company("12345", "").validate().unwrap_err();
        assert!(errors.fields().contains_key("inn"));
    }

    #[test]
    fn kpp_accepts_9_digits_or_empty() {
        assert!(company("7701234567", "7701").validate().is_err());
    }
}
