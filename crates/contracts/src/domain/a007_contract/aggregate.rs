use crate::domain::a001_currency::aggregate::CurrencyId;
use crate::domain::a003_company::aggregate::CompanyId;
use crate::domain::a004_purchaser::aggregate::PurchaserId;
use crate::domain::a006_project::aggregate::ProjectId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор контракта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractId(pub Uuid);

impl ContractId {
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

impl AggregateId for ContractId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ContractId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Ссылки контракта на справочники (разбираются сервисом до `apply`)
#[derive(Debug, Clone, Copy)]
pub struct ContractRefs {
    pub project_id: ProjectId,
    pub company_id: CompanyId,
    pub purchaser_id: PurchaserId,
    pub currency_id: CurrencyId,
}

/// Контракт: предмет (name), номер, стороны, сумма в валюте
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    #[serde(flatten)]
    pub base: BaseAggregate<ContractId>,

    /// Номер договора ("ДГ-2025-014")
    pub number: String,

    #[serde(rename = "projectId")]
    pub project_id: ProjectId,
    #[serde(rename = "companyId")]
    pub company_id: CompanyId,
    #[serde(rename = "purchaserId")]
    pub purchaser_id: PurchaserId,
    #[serde(rename = "currencyId")]
    pub currency_id: CurrencyId,

    pub amount: f64,

    #[serde(rename = "signedAt")]
    pub signed_at: Option<NaiveDate>,
}

impl Contract {
    pub fn new_for_insert(
        name: String,
        number: String,
        refs: ContractRefs,
        amount: f64,
        signed_at: Option<NaiveDate>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ContractId::new_v4(), name);
        base.comment = comment;

        Self {
            base,
            number,
            project_id: refs.project_id,
            company_id: refs.company_id,
            purchaser_id: refs.purchaser_id,
            currency_id: refs.currency_id,
            amount,
            signed_at,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO (ссылки и дата уже разобраны сервисом)
    pub fn apply(
        &mut self,
        dto: &ContractDto,
        refs: ContractRefs,
        signed_at: Option<NaiveDate>,
    ) {
        self.base.name = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.number = dto.number.clone();
        self.project_id = refs.project_id;
        self.company_id = refs.company_id;
        self.purchaser_id = refs.purchaser_id;
        self.currency_id = refs.currency_id;
        self.amount = dto.amount;
        self.signed_at = signed_at;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.base.name.trim().is_empty() {
            errors.add("name", "Предмет контракта не может быть пустым");
        }
        if self.number.trim().is_empty() {
            errors.add("number", "Номер контракта не может быть пустым");
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            errors.add("amount", "Сумма контракта должна быть больше нуля");
        }

        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Contract {
    type Id = ContractId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "contract"
    }

    fn element_name() -> &'static str {
        "Контракт"
    }

    fn list_name() -> &'static str {
        "Контракты"
    }
}

/// DTO для создания/обновления контракта.
///
/// Ссылки — uuid строками, дата подписания — "YYYY-MM-DD" или пустая строка.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContractDto {
    pub id: Option<String>,
    pub name: String,
    pub number: String,

    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "companyId")]
    pub company_id: String,
    #[serde(rename = "purchaserId")]
    pub purchaser_id: String,
    #[serde(rename = "currencyId")]
    pub currency_id: String,

    pub amount: f64,

    #[serde(rename = "signedAt", default)]
    pub signed_at: String,

    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs() -> ContractRefs {
        ContractRefs {
            project_id: ProjectId::new_v4(),
            company_id: CompanyId::new_v4(),
            purchaser_id: PurchaserId::new_v4(),
            currency_id: CurrencyId::new_v4(),
        }
    }

    #[test]
    fn contract_amount_must_be_positive() {
        let mut contract = Contract::new_for_insert(
            "Поставка оборудования".into(),
            "ДГ-2025-014".into(),
            refs(),
            1_500_000.0,
            NaiveDate::from_ymd_opt(2025, 3, 12),
            None,
        );
        assert!(contract.validate().is_ok());

        contract.amount = 0.0;
        let errors = contract.validate().unwrap_err();
        assert!(errors.fields().contains_key("amount"));
    }

    #[test]
    fn contract_requires_subject_and_number() {
        let contract =
            Contract::new_for_insert("".into(), "".into(), refs(), 100.0, None, None);
        let errors = contract.validate().unwrap_err();
        assert!(errors.fields().contains_key("name"));
        assert!(errors.fields().contains_key("number"));
    }
}
