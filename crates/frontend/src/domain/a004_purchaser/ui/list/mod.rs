use contracts::domain::a004_purchaser::aggregate::Purchaser;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::PurchaserDetails;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

#[component]
#[allow(non_snake_case)]
pub fn PurchaserList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Наименование", |p: &Purchaser| p.base.name.clone()),
        Column::new("contactPerson", "Контактное лицо", |p: &Purchaser| {
            p.contact_person.clone()
        }),
        Column::new("phone", "Телефон", |p: &Purchaser| p.phone.clone()),
        Column::new("email", "Email", |p: &Purchaser| p.email.clone()),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <PurchaserDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Purchaser::list_name(),
        element_name: Purchaser::element_name(),
        base_path: "/api/purchaser",
        columns,
        search_fields: vec![
            ("name", "Наименование"),
            ("contactPerson", "Контактное лицо"),
            ("email", "Email"),
        ],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|p: &Purchaser| p.to_string_id()),
        row_name: Arc::new(|p: &Purchaser| p.base.name.clone()),
        details,
        dialog_style: "max-width: 620px; width: min(620px, 95vw);",
    };

    view! { <ListView config=config /> }
}
