use contracts::domain::a004_purchaser::aggregate::{Purchaser, PurchaserDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::form::{apply_form_errors, field_error, FieldErrors};
use crate::shared::icons::icon;
use crate::shared::list_view::{DialogCallback, FormMode};
use crate::shared::toast::ToastService;

const FORM_FIELDS: &[&str] = &["name", "contactPerson", "phone", "email", "comment"];

#[component]
#[allow(non_snake_case)]
pub fn PurchaserDetails(
    mode: FormMode,
    on_saved: DialogCallback,
    on_cancel: DialogCallback,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let form = RwSignal::new(PurchaserDto::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let is_edit = mode.is_edit();

    if let FormMode::Edit(id) = mode.clone() {
        spawn_local(async move {
            match api::get(&format!("/api/purchaser/{}", id)).await {
                Ok(response) if response.is_success() => match response.json::<Purchaser>() {
                    Ok(purchaser) => form.set(PurchaserDto {
                        id: Some(purchaser.to_string_id()),
                        name: purchaser.base.name,
                        contact_person: purchaser.contact_person,
                        phone: purchaser.phone,
                        email: purchaser.email,
                        comment: purchaser.base.comment,
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
                FormMode::Edit(id) => {
                    api::patch_json(&format!("/api/purchaser/{}", id), &dto).await
                }
                FormMode::Create => api::post_json("/api/purchaser", &dto).await,
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
                <h3>{if is_edit { "Редактирование покупателя" } else { "Новый покупатель" }}</h3>
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
                        placeholder="ООО «Заказчик»"
                    />
                    {move || {
                        field_error(&field_errors.get(), "name")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label for="contact_person">{"Контактное лицо"}</label>
                    <input
                        type="text"
                        id="contact_person"
                        prop:value=move || form.get().contact_person
                        on:input=move |ev| {
                            form.update(|f| f.contact_person = event_target_value(&ev))
                        }
                        placeholder="Фамилия И. О."
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Телефон"}</label>
                    <input
                        type="text"
                        id="phone"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        placeholder="+7 900 000-00-00"
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="text"
                        id="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        placeholder="client@example.com"
                    />
                    {move || {
                        field_error(&field_errors.get(), "email")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
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
