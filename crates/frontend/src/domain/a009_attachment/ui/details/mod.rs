use contracts::domain::a007_contract::aggregate::Contract;
use contracts::domain::a009_attachment::aggregate::{Attachment, AttachmentDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::form::{
    apply_form_errors, field_error, load_options, FieldErrors, SelectOption,
};
use crate::shared::icons::icon;
use crate::shared::list_view::{DialogCallback, FormMode};
use crate::shared::toast::ToastService;

const FORM_FIELDS: &[&str] = &["name", "contractId", "fileName", "comment"];

/// Сохранить массив байт как скачиваемый файл
fn save_blob(data: &[u8], file_name: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(data));

    let blob =
        web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|_| "Failed to create blob")?;
    let url =
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "Failed to create URL")?;

    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create element")?
        .dyn_into()
        .map_err(|_| "Failed to cast to anchor")?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}

#[component]
#[allow(non_snake_case)]
pub fn AttachmentDetails(
    mode: FormMode,
    on_saved: DialogCallback,
    on_cancel: DialogCallback,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let form = RwSignal::new(AttachmentDto::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let contract_options = RwSignal::new(Vec::<SelectOption>::new());

    // Файл живёт вне реактивного графа: web_sys::File не Send
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (file_label, set_file_label) = signal(String::new());
    let (file_name, set_file_name) = signal(String::new());

    let is_edit = mode.is_edit();

    spawn_local(async move {
        match load_options::<Contract, _>("/api/contract", |c| {
            (c.base.id.as_string(), format!("{} «{}»", c.number, c.base.name))
        })
        .await
        {
            Ok(options) => contract_options.set(options),
            Err(e) => load_error.set(Some(e)),
        }
    });

    if let FormMode::Edit(id) = mode.clone() {
        spawn_local(async move {
            match api::get(&format!("/api/attachment/{}", id)).await {
                Ok(response) if response.is_success() => match response.json::<Attachment>() {
                    Ok(attachment) => {
                        set_file_name.set(attachment.file_name.clone());
                        form.set(AttachmentDto {
                            id: Some(attachment.to_string_id()),
                            name: attachment.base.name,
                            contract_id: attachment.contract_id.map(|c| c.as_string()),
                            comment: attachment.base.comment,
                        });
                    }
                    Err(e) => load_error.set(Some(e)),
                },
                Ok(response) => load_error.set(Some(response.form_errors().message)),
                Err(e) => load_error.set(Some(e)),
            }
        });
    }

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        match file {
            Some(file) => {
                set_file_label.set(file.name());
                selected_file.set_value(Some(file));
            }
            None => {
                set_file_label.set(String::new());
                selected_file.set_value(None);
            }
        }
    };

    let mode_for_save = mode.clone();
    let save = move |_| {
        if saving.get_untracked() {
            return;
        }

        match mode_for_save.clone() {
            FormMode::Create => {
                let Some(file) = selected_file.get_value() else {
                    toasts.error("Выберите файл для загрузки");
                    return;
                };

                let form_data = match web_sys::FormData::new() {
                    Ok(form_data) => form_data,
                    Err(_) => {
                        toasts.error("Непредвиденная ошибка, попробуйте позже");
                        return;
                    }
                };
                if form_data
                    .append_with_blob_and_filename("file", &file, &file.name())
                    .is_err()
                {
                    toasts.error("Не удалось подготовить файл к загрузке");
                    return;
                }
                let contract_id = form.get_untracked().contract_id.unwrap_or_default();
                if !contract_id.is_empty() {
                    let _ = form_data.append_with_str("contractId", &contract_id);
                }

                saving.set(true);
                let on_saved = on_saved.clone();
                spawn_local(async move {
                    let result = api::upload("/api/attachment/upload", form_data).await;
                    saving.set(false);

                    match result {
                        Ok(response) if response.is_success() => (on_saved)(),
                        Ok(response) if response.status >= 500 => {
                            toasts.error("Сервис недоступен, попробуйте позже")
                        }
                        Ok(response) => apply_form_errors(
                            response.form_errors(),
                            FORM_FIELDS,
                            field_errors,
                            &toasts,
                        ),
                        Err(_) => toasts.error("Непредвиденная ошибка, попробуйте позже"),
                    }
                });
            }
            FormMode::Edit(id) => {
                saving.set(true);
                field_errors.set(FieldErrors::new());

                let dto = form.get_untracked();
                let on_saved = on_saved.clone();
                spawn_local(async move {
                    let result = api::patch_json(&format!("/api/attachment/{}", id), &dto).await;
                    saving.set(false);

                    match result {
                        Ok(response) if response.is_success() => (on_saved)(),
                        Ok(response) if response.status >= 500 => {
                            toasts.error("Сервис недоступен, попробуйте позже")
                        }
                        Ok(response) => apply_form_errors(
                            response.form_errors(),
                            FORM_FIELDS,
                            field_errors,
                            &toasts,
                        ),
                        Err(_) => toasts.error("Непредвиденная ошибка, попробуйте позже"),
                    }
                });
            }
        }
    };

    let mode_for_download = mode.clone();
    let download = move |_| {
        let FormMode::Edit(id) = mode_for_download.clone() else {
            return;
        };
        let name = {
            let from_file = file_name.get_untracked();
            if from_file.is_empty() {
                form.get_untracked().name
            } else {
                from_file
            }
        };
        spawn_local(async move {
            match api::get_bytes(&format!("/api/attachment/{}/download", id)).await {
                Ok(data) => {
                    if save_blob(&data, &name).is_err() {
                        toasts.error("Не удалось сохранить файл");
                    }
                }
                Err(_) => toasts.error("Не удалось скачать файл"),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{if is_edit { "Редактирование файла" } else { "Загрузка файла" }}</h3>
            </div>

            {move || load_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {(!is_edit)
                    .then(|| {
                        view! {
                            <div class="form-group">
                                <label for="file">{"Файл"}</label>
                                <input type="file" id="file" on:change=on_file_change />
                                {move || {
                                    (!file_label.get().is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="form-group__hint">{file_label.get()}</div>
                                            }
                                        })
                                }}
                                {move || {
                                    field_error(&field_errors.get(), "fileName")
                                        .map(|e| view! { <div class="field-error">{e}</div> })
                                }}
                            </div>
                        }
                    })}

                {is_edit
                    .then(|| {
                        view! {
                            <div class="form-group">
                                <label for="name">{"Наименование"}</label>
                                <input
                                    type="text"
                                    id="name"
                                    prop:value=move || form.get().name
                                    on:input=move |ev| {
                                        form.update(|f| f.name = event_target_value(&ev))
                                    }
                                />
                                {move || {
                                    field_error(&field_errors.get(), "name")
                                        .map(|e| view! { <div class="field-error">{e}</div> })
                                }}
                            </div>
                        }
                    })}

                <div class="form-group">
                    <label for="contract_id">{"Контракт"}</label>
                    <select
                        id="contract_id"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.contract_id = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    >
                        <option value="">{"— не привязан —"}</option>
                        {move || {
                            let selected = form.get().contract_id.unwrap_or_default();
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
                    {move || {
                        field_error(&field_errors.get(), "contractId")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                {is_edit
                    .then(|| {
                        view! {
                            <div class="form-group">
                                <label for="comment">{"Комментарий"}</label>
                                <textarea
                                    id="comment"
                                    prop:value=move || form.get().comment.clone().unwrap_or_default()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| {
                                            f.comment = if value.is_empty() {
                                                None
                                            } else {
                                                Some(value)
                                            };
                                        });
                                    }
                                    rows="3"
                                />
                            </div>
                        }
                    })}
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save disabled=move || saving.get()>
                    {if is_edit { icon("save") } else { icon("upload") }}
                    {if is_edit { "Сохранить" } else { "Загрузить" }}
                </button>
                {is_edit
                    .then(|| {
                        view! {
                            <button class="btn btn-secondary" on:click=download>
                                {icon("download")}
                                {"Скачать"}
                            </button>
                        }
                    })}
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)()>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
