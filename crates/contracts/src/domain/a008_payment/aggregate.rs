use crate::domain::a007_contract::aggregate::ContractId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор платежа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub Uuid);

impl PaymentId {
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

impl AggregateId for PaymentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Платёж по контракту. `name` — назначение платежа.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(flatten)]
    pub base: BaseAggregate<PaymentId>,

    #[serde(rename = "contractId")]
    pub contract_id: ContractId,

    pub amount: f64,

    #[serde(rename = "paidAt")]
    pub paid_at: NaiveDate,
}

impl Payment {
    pub fn new_for_insert(
        name: String,
        contract_id: ContractId,
        amount: f64,
        paid_at: NaiveDate,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(PaymentId::new_v4(), name);
        base.comment = comment;

        Self {
            base,
            contract_id,
            amount,
            paid_at,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO (ссылка и дата уже разобраны сервисом)
    pub fn apply(&mut self, dto: &PaymentDto, contract_id: ContractId, paid_at: NaiveDate) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.contract_id = contract_id;
        self.amount = dto.amount;
        self.paid_at = paid_at;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Назначение платежа не может быть пустым");
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            errors.add("amount", "Сумма платежа должна быть больше нуля");
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Payment {
    type Id = PaymentId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "payment"
    }

    fn element_name() -> &'static str {
        "Платёж"
    }

    fn list_name() -> &'static str {
        "Платежи"
    }
}

/// DTO для создания/обновления платежа
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentDto {
    pub id: Option<String>,
    pub name: String,

    #[serde(rename = "contractId")]
    pub contract_id: String,

    pub amount: f64,

    /// "YYYY-MM-DD"
    #[serde(rename = "paidAt", default)]
    pub paid_at: String,

    pub comment: Option<String>,
}
