use contracts::domain::a003_company::aggregate::Company;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::CompanyDetails;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

#[component]
#[allow(non_snake_case)]
pub fn CompanyList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Наименование", |c: &Company| c.base.name.clone()),
        Column::new("inn", "ИНН", |c: &Company| c.inn.clone()),
        Column::new("kpp", "КПП", |c: &Company| c.kpp.clone()),
        Column::new("address", "Адрес", |c: &Company| c.address.clone()),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <CompanyDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Company::list_name(),
        element_name: Company::element_name(),
        base_path: "/api/company",
        columns,
        search_fields: vec![
            ("name", "Наименование"),
            ("fullName", "Полное наименование"),
            ("inn", "ИНН"),
        ],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|c: &Company| c.to_string_id()),
        row_name: Arc::new(|c: &Company| c.base.name.clone()),
        details,
        dialog_style: "max-width: 680px; width: min(680px, 95vw);",
    };

    view! { <ListView config=config /> }
}
