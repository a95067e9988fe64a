use contracts::domain::a007_contract::aggregate::Contract;
use contracts::domain::a008_payment::aggregate::Payment;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use super::details::PaymentDetails;
use crate::shared::form::{load_options, SelectOption};
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

/// Журнал платежей с фильтром по контракту.
///
/// Выбранный контракт становится фиксированным фильтром области вложенного
/// списка: пара `contractId=...` добавляется к каждому запросу коллекции.
#[component]
#[allow(non_snake_case)]
pub fn PaymentPage() -> impl IntoView {
    let (contract_filter, set_contract_filter) = signal(String::new());
    let contract_options = RwSignal::new(Vec::<SelectOption>::new());

    spawn_local(async move {
        if let Ok(options) = load_options::<Contract, _>("/api/contract", |c| {
            (c.base.id.as_string(), format!("{} «{}»", c.number, c.base.name))
        })
        .await
        {
            contract_options.set(options);
        }
    });

    view! {
        <div>
            <div class="scope-filter">
                <label class="scope-filter__label">{"Контракт:"}</label>
                <select
                    class="scope-filter__select"
                    on:change=move |ev| set_contract_filter.set(event_target_value(&ev))
                >
                    <option value="">{"Все контракты"}</option>
                    {move || {
                        let selected = contract_filter.get();
                        contract_options
                            .get()
                            .into_iter()
                            .map(|(id, label)| {
                                let is_selected = id == selected;
                                view! {
                                    <option value=id.clone() selected=is_selected>{label}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            // Смена области пересоздаёт список с новым фиксированным фильтром
            {move || {
                let filter = contract_filter.get();
                let scope = if filter.is_empty() {
                    None
                } else {
                    Some(("contractId", filter))
                };
                view! { <PaymentList scope=scope /> }
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PaymentList(#[prop(optional_no_strip)] scope: Option<(&'static str, String)>) -> impl IntoView {
    let columns = vec![
        Column::new("name", "Назначение", |p: &Payment| p.base.name.clone()),
        Column::new("amount", "Сумма", |p: &Payment| format!("{:.2}", p.amount)).right(),
        Column::new("paidAt", "Дата платежа", |p: &Payment| {
            p.paid_at.format("%d.%m.%Y").to_string()
        }),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <PaymentDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Payment::list_name(),
        element_name: Payment::element_name(),
        base_path: "/api/payment",
        columns,
        search_fields: vec![("name", "Назначение")],
        default_sort_by: "paidAt",
        scope,
        row_id: Arc::new(|p: &Payment| p.to_string_id()),
        row_name: Arc::new(|p: &Payment| {
            format!("{} на {:.2}", p.base.name, p.amount)
        }),
        details,
        dialog_style: "max-width: 620px; width: min(620px, 95vw);",
    };

    view! { <ListView config=config /> }
}
