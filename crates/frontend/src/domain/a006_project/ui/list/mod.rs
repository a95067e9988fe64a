use contracts::domain::a006_project::aggregate::Project;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::ProjectDetails;
use crate::shared::format_timestamp;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Наименование", |p: &Project| p.base.name.clone()),
        Column::new("comment", "Комментарий", |p: &Project| {
            p.base.comment.clone().unwrap_or_else(|| "—".to_string())
        })
        .unsortable(),
        Column::new("created_at", "Создано", |p: &Project| {
            format_timestamp(p.base.metadata.created_at)
        }),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <ProjectDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Project::list_name(),
        element_name: Project::element_name(),
        base_path: "/api/project",
        columns,
        search_fields: vec![("name", "Наименование")],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|p: &Project| p.to_string_id()),
        row_name: Arc::new(|p: &Project| p.base.name.clone()),
        details,
        dialog_style: "max-width: 560px; width: min(560px, 95vw);",
    };

    view! { <ListView config=config /> }
}
