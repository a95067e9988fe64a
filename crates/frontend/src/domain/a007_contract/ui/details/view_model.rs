use contracts::domain::a001_currency::aggregate::Currency;
use contracts::domain::a003_company::aggregate::Company;
use contracts::domain::a004_purchaser::aggregate::Purchaser;
use contracts::domain::a006_project::aggregate::Project;
use contracts::domain::a007_contract::aggregate::{Contract, ContractDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::form::{apply_form_errors, load_options, FieldErrors, SelectOption};
use crate::shared::list_view::{DialogCallback, FormMode};
use crate::shared::toast::ToastService;

pub const FORM_FIELDS: &[&str] = &[
    "name",
    "number",
    "projectId",
    "companyId",
    "purchaserId",
    "currencyId",
    "amount",
    "signedAt",
    "comment",
];

/// Сводка оплат контракта (ответ payments-summary)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsSummary {
    pub contract_amount: f64,
    pub paid_total: f64,
    pub remaining: f64,
    pub percent_paid: f64,
    pub payments_count: usize,
}

/// ViewModel формы контракта: DTO, ошибки полей, справочники, сводка оплат
#[derive(Clone, Copy)]
pub struct ContractDetailsViewModel {
    pub form: RwSignal<ContractDto>,
    pub field_errors: RwSignal<FieldErrors>,
    pub load_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub project_options: RwSignal<Vec<SelectOption>>,
    pub company_options: RwSignal<Vec<SelectOption>>,
    pub purchaser_options: RwSignal<Vec<SelectOption>>,
    pub currency_options: RwSignal<Vec<SelectOption>>,
    pub summary: RwSignal<Option<PaymentsSummary>>,
}

impl ContractDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContractDto::default()),
            field_errors: RwSignal::new(FieldErrors::new()),
            load_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            project_options: RwSignal::new(Vec::new()),
            company_options: RwSignal::new(Vec::new()),
            purchaser_options: RwSignal::new(Vec::new()),
            currency_options: RwSignal::new(Vec::new()),
            summary: RwSignal::new(None),
        }
    }

    /// Справочники для селекторов ссылок
    pub fn load_reference_data(&self) {
        let vm = *self;
        spawn_local(async move {
            let projects = load_options::<Project, _>("/api/project", |p| {
                (p.base.id.as_string(), p.base.name.clone())
            })
            .await;
            let companies = load_options::<Company, _>("/api/company", |c| {
                (c.base.id.as_string(), c.base.name.clone())
            })
            .await;
            let purchasers = load_options::<Purchaser, _>("/api/purchaser", |p| {
                (p.base.id.as_string(), p.base.name.clone())
            })
            .await;
            let currencies = load_options::<Currency, _>("/api/currency", |c| {
                (c.base.id.as_string(), format!("{} ({})", c.base.name, c.code))
            })
            .await;

            match (projects, companies, purchasers, currencies) {
                (Ok(projects), Ok(companies), Ok(purchasers), Ok(currencies)) => {
                    vm.project_options.set(projects);
                    vm.company_options.set(companies);
                    vm.purchaser_options.set(purchasers);
                    vm.currency_options.set(currencies);
                }
                _ => vm
                    .load_error
                    .set(Some("Не удалось загрузить справочники".to_string())),
            }
        });
    }

    /// Загрузка контракта и сводки оплат в режиме редактирования
    pub fn load_if_needed(&self, mode: &FormMode) {
        let FormMode::Edit(id) = mode.clone() else {
            return;
        };
        let vm = *self;

        spawn_local(async move {
            match api::get(&format!("/api/contract/{}", id)).await {
                Ok(response) if response.is_success() => match response.json::<Contract>() {
                    Ok(contract) => vm.form.set(ContractDto {
                        id: Some(contract.to_string_id()),
                        name: contract.base.name,
                        number: contract.number,
                        project_id: contract.project_id.as_string(),
                        company_id: contract.company_id.as_string(),
                        purchaser_id: contract.purchaser_id.as_string(),
                        currency_id: contract.currency_id.as_string(),
                        amount: contract.amount,
                        signed_at: contract
                            .signed_at
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default(),
                        comment: contract.base.comment,
                    }),
                    Err(e) => vm.load_error.set(Some(e)),
                },
                Ok(response) => vm.load_error.set(Some(response.form_errors().message)),
                Err(e) => vm.load_error.set(Some(e)),
            }

            // Сводка оплат — вспомогательный блок, её отказ не валит форму
            if let Ok(response) = api::get(&format!("/api/contract/{}/payments-summary", id)).await
            {
                if response.is_success() {
                    if let Ok(summary) = response.json::<PaymentsSummary>() {
                        vm.summary.set(Some(summary));
                    }
                }
            }
        });
    }

    pub fn save_command(&self, mode: FormMode, on_saved: DialogCallback, toasts: ToastService) {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);
        self.field_errors.set(FieldErrors::new());

        let vm = *self;
        let dto = self.form.get_untracked();
        spawn_local(async move {
            let result = match &mode {
                FormMode::Edit(id) => api::patch_json(&format!("/api/contract/{}", id), &dto).await,
                FormMode::Create => api::post_json("/api/contract", &dto).await,
            };
            vm.saving.set(false);

            match result {
                Ok(response) if response.is_success() => (on_saved)(),
                Ok(response) if response.status >= 500 => {
                    toasts.error("Сервис недоступен, попробуйте позже")
                }
                Ok(response) => apply_form_errors(
                    response.form_errors(),
                    FORM_FIELDS,
                    vm.field_errors,
                    &toasts,
                ),
                Err(_) => toasts.error("Непредвиденная ошибка, попробуйте позже"),
            }
        });
    }
}

impl Default for ContractDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
