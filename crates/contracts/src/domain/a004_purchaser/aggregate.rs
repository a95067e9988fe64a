use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор покупателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaserId(pub Uuid);

impl PurchaserId {
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

impl AggregateId for PurchaserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaserId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Покупатель (заказчик по контрактам)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchaser {
    #[serde(flatten)]
    pub base: BaseAggregate<PurchaserId>,

    #[serde(rename = "contactPerson")]
    pub contact_person: String,

    pub phone: String,
    pub email: String,
}

impl Purchaser {
    pub fn new_for_insert(
        name: String,
        contact_person: String,
        phone: String,
        email: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(PurchaserId::new_v4(), name);
        base.comment = comment;

        Self {
            base,
            contact_person,
            phone,
            email,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn apply(&mut self, dto: &PurchaserDto) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.contact_person = dto.contact_person.clone();
        self.phone = dto.phone.clone();
        self.email = dto.email.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Наименование не может быть пустым");
        }

        let email = self.email.trim();
        if !email.is_empty() {
            // Грубая проверка: одна @, непустые части
            let mut parts = email.splitn(2, '@');
            let local = parts.next().unwrap_or_default();
            let domain = parts.next().unwrap_or_default();
            if local.is_empty() || domain.is_empty() || !domain.contains('.') {
                errors.add("email", "Некорректный адрес электронной почты");
            }
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Purchaser {
    type Id = PurchaserId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "purchaser"
    }

    fn element_name() -> &'static str {
        "Покупатель"
    }

    fn list_name() -> &'static str {
        "Покупатели"
    }
}

/// DTO для создания/обновления покупателя
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PurchaserDto {
    pub id: Option<String>,
    pub name: String,

    #[serde(rename = "contactPerson")]
    pub contact_person: String,

    pub phone: String,
    pub email: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_checked_when_present() {
        let mut purchaser = Purchaser::new_for_insert(
            "ИП Иванов".into(),
            "Иванов И.И.".into(),
            "+7 900 000-00-00".into(),
            "ivanov@example.com".into(),
            None,
        );
        assert!(purchaser.validate().is_ok());

        purchaser.email = "not-an-email".into();
        let errors = purchaser.validate().unwrap_err();
        assert!(errors.fields().contains_key("email"));

        purchaser.email = String::new();
        assert!(purchaser.validate().is_ok());
    }
}
