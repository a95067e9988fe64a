use contracts::domain::a002_unit::aggregate::Unit;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::UnitDetails;
use crate::shared::format_timestamp;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

#[component]
#[allow(non_snake_case)]
pub fn UnitList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Наименование", |u: &Unit| u.base.name.clone()),
        Column::new("symbol", "Обозначение", |u: &Unit| u.symbol.clone()),
        Column::new("created_at", "Создано", |u: &Unit| {
            format_timestamp(u.base.metadata.created_at)
        }),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <UnitDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Unit::list_name(),
        element_name: Unit::element_name(),
        base_path: "/api/unit",
        columns,
        search_fields: vec![("name", "Наименование"), ("symbol", "Обозначение")],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|u: &Unit| u.to_string_id()),
        row_name: Arc::new(|u: &Unit| u.base.name.clone()),
        details,
        dialog_style: "max-width: 560px; width: min(560px, 95vw);",
    };

    view! { <ListView config=config /> }
}
