use contracts::domain::a003_company::aggregate::{Company, CompanyDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::form::{apply_form_errors, field_error, FieldErrors};
use crate::shared::icons::icon;
use crate::shared::list_view::{DialogCallback, FormMode};
use crate::shared::toast::ToastService;

const FORM_FIELDS: &[&str] = &["name", "fullName", "inn", "kpp", "address", "comment"];

#[component]
#[allow(non_snake_case)]
pub fn CompanyDetails(
    mode: FormMode,
    on_saved: DialogCallback,
    on_cancel: DialogCallback,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let form = RwSignal::new(CompanyDto::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let is_edit = mode.is_edit();

    if let FormMode::Edit(id) = mode.clone() {
        spawn_local(async move {
            match api::get(&format!("/api/company/{}", id)).await {
                Ok(response) if response.is_success() => match response.json::<Company>() {
                    Ok(company) => form.set(CompanyDto {
                        id: Some(company.to_string_id()),
                        name: company.base.name,
                        full_name: company.full_name,
                        inn: company.inn,
                        kpp: company.kpp,
                        address: company.address,
                        comment: company.base.comment,
                    }),
                    Err(e) => load_error.set(Some(e)),
                },
                Ok(response) => load_error.set(Some(response.form_errors().message)),
                Err(e) => load_error.set(Some(e)),
            }
        });
    }

    let mode_for_save = mode.clone();
    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        field_errors.set(FieldErrors::new());

        let dto = form.get_untracked();
        let mode = mode_for_save.clone();
        let on_saved = on_saved.clone();
        spawn_local(async move {
            let result = match &mode {
                FormMode::Edit(id) => api::patch_json(&format!("/api/company/{}", id), &dto).await,
                FormMode::Create => api::post_json("/api/company", &dto).await,
            };
            saving.set(false);

            match result {
                Ok(response) if response.is_success() => (on_saved)(),
                Ok(response) if response.status >= 500 => {
                    toasts.error("Сервис недоступен, попробуйте позже")
                }
                Ok(response) => {
                    apply_form_errors(response.form_errors(), FORM_FIELDS, field_errors, &toasts)
                }
                Err(_) => toasts.error("Непредвиденная ошибка, попробуйте позже"),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{if is_edit { "Редактирование компании" } else { "Новая компания" }}</h3>
            </div>

            {move || load_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Наименование"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Введите краткое наименование"
                    />
                    {move || {
                        field_error(&field_errors.get(), "name")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label for="full_name">{"Полное наименование"}</label>
                    <input
                        type="text"
                        id="full_name"
                        prop:value=move || form.get().full_name
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        placeholder="Введите полное наименование организации"
                    />
                    {move || {
                        field_error(&field_errors.get(), "fullName")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label for="inn">{"ИНН"}</label>
                    <input
                        type="text"
                        id="inn"
                        prop:value=move || form.get().inn
                        on:input=move |ev| form.update(|f| f.inn = event_target_value(&ev))
                        placeholder="10 или 12 цифр"
                        maxlength="12"
                    />
                    {move || {
                        field_error(&field_errors.get(), "inn")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label for="kpp">{"КПП"}</label>
                    <input
                        type="text"
                        id="kpp"
                        prop:value=move || form.get().kpp
                        on:input=move |ev| form.update(|f| f.kpp = event_target_value(&ev))
                        placeholder="9 цифр (необязательно для ИП)"
                        maxlength="9"
                    />
                    {move || {
                        field_error(&field_errors.get(), "kpp")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label for="address">{"Адрес"}</label>
                    <input
                        type="text"
                        id="address"
                        prop:value=move || form.get().address
                        on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                        placeholder="Юридический адрес"
                    />
                </div>

                <div class="form-group">
                    <label for="comment">{"Комментарий"}</label>
                    <textarea
                        id="comment"
                        prop:value=move || form.get().comment.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save disabled=move || saving.get()>
                    {icon("save")}
                    {if is_edit { "Сохранить" } else { "Создать" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)()>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
