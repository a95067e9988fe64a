use contracts::domain::a005_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::ProductDetails;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Наименование", |p: &Product| p.base.name.clone()),
        Column::new("sku", "Артикул", |p: &Product| p.sku.clone()),
        Column::new("price", "Цена", |p: &Product| format!("{:.2}", p.price)).right(),
        Column::new("quantity", "Остаток", |p: &Product| {
            format!("{:.3}", p.quantity)
        })
        .right(),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <ProductDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Product::list_name(),
        element_name: Product::element_name(),
        base_path: "/api/product",
        columns,
        search_fields: vec![("name", "Наименование"), ("sku", "Артикул")],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|p: &Product| p.to_string_id()),
        row_name: Arc::new(|p: &Product| p.base.name.clone()),
        details,
        dialog_style: "max-width: 640px; width: min(640px, 95vw);",
    };

    view! { <ListView config=config /> }
}
