//! Привязка серверных ошибок `{message, details}` к полям формы

use contracts::shared::validation::FormErrors;
use leptos::prelude::*;
use std::collections::BTreeMap;

use crate::shared::api;
use crate::shared::toast::ToastService;

pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Разложить ответ сервера по полям формы.
///
/// Ключи `details`, совпадающие с известными полями формы, попадают в
/// `field_errors`; если совпадений нет — показывается общий toast с
/// `message` (и только он).
pub fn apply_form_errors(
    errors: FormErrors,
    known_fields: &[&str],
    field_errors: RwSignal<FieldErrors>,
    toasts: &ToastService,
) {
    let matched: FieldErrors = errors
        .details
        .into_iter()
        .filter(|(key, _)| known_fields.contains(&key.as_str()))
        .collect();

    if matched.is_empty() {
        toasts.error(errors.message);
        field_errors.set(FieldErrors::new());
    } else {
        field_errors.set(matched);
    }
}

/// Первое сообщение об ошибке поля (для вывода под input)
pub fn field_error(field_errors: &FieldErrors, field: &str) -> Option<String> {
    field_errors.get(field).and_then(|list| list.first().cloned())
}

/// Вариант выпадающего списка: (id, подпись)
pub type SelectOption = (String, String);

/// Загрузить варианты для селектора ссылок (первые 500 записей справочника)
pub async fn load_options<T, F>(base_path: &str, label: F) -> Result<Vec<SelectOption>, String>
where
    T: serde::de::DeserializeOwned,
    F: Fn(&T) -> (String, String),
{
    use contracts::shared::query::{ListQuery, Page, SortDir};

    let query = ListQuery {
        limit: 500,
        sort_by: "name".into(),
        sort_type: SortDir::Asc,
        ..ListQuery::default()
    };

    let response = api::get_page(base_path, &query, None).await?;
    if !response.is_success() {
        return Err(response.form_errors().message);
    }

    let page: Page<T> = response.json()?;
    Ok(page.rows.iter().map(&label).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_keys_are_kept_unmatched_are_dropped() {
        let mut form = FormErrors::message_only("Validation failed");
        form.details
            .insert("name".into(), vec!["too short".into()]);
        form.details
            .insert("unknown_field".into(), vec!["ignored".into()]);

        let matched: FieldErrors = form
            .details
            .into_iter()
            .filter(|(key, _)| ["name", "symbol"].contains(&key.as_str()))
            .collect();

        assert_eq!(matched.len(), 1);
        assert_eq!(field_error(&matched, "name").unwrap(), "too short");
        assert!(field_error(&matched, "symbol").is_none());
    }
}
