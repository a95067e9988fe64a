use contracts::domain::a009_attachment::aggregate::Attachment;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use std::sync::Arc;

use super::details::AttachmentDetails;
use crate::shared::format_timestamp;
use crate::shared::list_view::{Column, DetailsBuilder, ListView, ListViewConfig};

/// Размер файла в человекочитаемом виде
fn format_size(size_bytes: i64) -> String {
    let size = size_bytes as f64;
    if size >= 1024.0 * 1024.0 {
        format!("{:.1} МБ", size / 1024.0 / 1024.0)
    } else if size >= 1024.0 {
        format!("{:.1} КБ", size / 1024.0)
    } else {
        format!("{} Б", size_bytes)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AttachmentList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Наименование", |a: &Attachment| a.base.name.clone()),
        Column::new("fileName", "Файл", |a: &Attachment| a.file_name.clone()),
        Column::new("sizeBytes", "Размер", |a: &Attachment| {
            format_size(a.size_bytes)
        })
        .right(),
        Column::new("created_at", "Загружен", |a: &Attachment| {
            format_timestamp(a.base.metadata.created_at)
        }),
    ];

    let details: DetailsBuilder = Arc::new(|mode, on_saved, on_cancel| {
        view! { <AttachmentDetails mode=mode on_saved=on_saved on_cancel=on_cancel /> }.into_any()
    });

    let config = ListViewConfig {
        title: Attachment::list_name(),
        element_name: Attachment::element_name(),
        base_path: "/api/attachment",
        columns,
        search_fields: vec![("name", "Наименование"), ("fileName", "Имя файла")],
        default_sort_by: "created_at",
        scope: None,
        row_id: Arc::new(|a: &Attachment| a.to_string_id()),
        row_name: Arc::new(|a: &Attachment| a.base.name.clone()),
        details,
        dialog_style: "max-width: 620px; width: min(620px, 95vw);",
    };

    view! { <ListView config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_formatting_picks_sane_units() {
        assert_eq!(format_size(512), "512 Б");
        assert_eq!(format_size(2048), "2.0 КБ");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 МБ");
    }
}
