use contracts::domain::a007_contract::aggregate::Contract;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::ContractDetails;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

#[component]
#[allow(non_snake_case)]
pub fn ContractList() -> impl IntoView {
    let columns = vec![
        Column::new("number", "Номер", |c: &Contract| c.number.clone()),
        Column::new("name", "Предмет", |c: &Contract| c.base.name.clone()),
        Column::new("amount", "Сумма", |c: &Contract| format!("{:.2}", c.amount)).right(),
        Column::new("signedAt", "Подписан", |c: &Contract| {
            c.signed_at
                .map(|d| d.format("%d.%m.%Y").to_string())
                .unwrap_or_else(|| "—".to_string())
        }),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <ContractDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Contract::list_name(),
        element_name: Contract::element_name(),
        base_path: "/api/contract",
        columns,
        search_fields: vec![("name", "Предмет"), ("number", "Номер")],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|c: &Contract| c.to_string_id()),
        row_name: Arc::new(|c: &Contract| format!("{} «{}»", c.number, c.base.name)),
        details,
        dialog_style: "max-width: 760px; width: min(760px, 95vw);",
    };

    view! { <ListView config=config /> }
}
