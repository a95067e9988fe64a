use contracts::domain::a001_currency::aggregate::Currency;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::CurrencyDetails;
use crate::shared::format_timestamp;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

#[component]
#[allow(non_snake_case)]
pub fn CurrencyList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Наименование", |c: &Currency| c.base.name.clone()),
        Column::new("code", "Код", |c: &Currency| c.code.clone()),
        Column::new("symbol", "Символ", |c: &Currency| c.symbol.clone()),
        Column::new("created_at", "Создано", |c: &Currency| {
            format_timestamp(c.base.metadata.created_at)
        }),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <CurrencyDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Currency::list_name(),
        element_name: Currency::element_name(),
        base_path: "/api/currency",
        columns,
        search_fields: vec![("name", "Наименование"), ("code", "Код")],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|c: &Currency| c.to_string_id()),
        row_name: Arc::new(|c: &Currency| c.base.name.clone()),
        details,
        dialog_style: "max-width: 560px; width: min(560px, 95vw);",
    };

    view! { <ListView config=config /> }
}
