use contracts::domain::a002_unit::aggregate::Unit;
use contracts::domain::a005_product::aggregate::{Product, ProductDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::form::{
    apply_form_errors, field_error, load_options, FieldErrors, SelectOption,
};
use crate::shared::icons::icon;
use crate::shared::list_view::{DialogCallback, FormMode};
use crate::shared::toast::ToastService;

const FORM_FIELDS: &[&str] = &["name", "sku", "unitId", "price", "quantity", "comment"];

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails(
    mode: FormMode,
    on_saved: DialogCallback,
    on_cancel: DialogCallback,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let form = RwSignal::new(ProductDto::default());
    let field_errors = RwSignal::new(FieldErrors::new());
    let load_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let unit_options = RwSignal::new(Vec::<SelectOption>::new());

    let is_edit = mode.is_edit();

    // Справочник единиц для селектора
    spawn_local(async move {
        match load_options::<Unit, _>("/api/unit", |u| {
            (u.base.id.as_string(), format!("{} ({})", u.base.name, u.symbol))
        })
        .await
        {
            Ok(options) => unit_options.set(options),
            Err(e) => load_error.set(Some(e)),
        }
    });

    if let FormMode::Edit(id) = mode.clone() {
        spawn_local(async move {
            match api::get(&format!("/api/product/{}", id)).await {
                Ok(response) if response.is_success() => match response.json::<Product>() {
                    Ok(product) => form.set(ProductDto {
                        id: Some(product.to_string_id()),
                        name: product.base.name,
                        sku: product.sku,
                        unit_id: product.unit_id.as_string(),
                        price: product.price,
                        quantity: product.quantity,
                        comment: product.base.comment,
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
                FormMode::Edit(id) => api::patch_json(&format!("/api/product/{}", id), &dto).await,
                FormMode::Create => api::post_json("/api/product", &dto).await,
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
                <h3>{if is_edit { "Редактирование товара" } else { "Новый товар" }}</h3>
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
                        placeholder="Труба стальная 100мм"
                    />
                    {move || {
                        field_error(&field_errors.get(), "name")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label for="sku">{"Артикул"}</label>
                    <input
                        type="text"
                        id="sku"
                        prop:value=move || form.get().sku
                        on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                        placeholder="TR-100"
                    />
                </div>

                <div class="form-group">
                    <label for="unit_id">{"Единица измерения"}</label>
                    <select
                        id="unit_id"
                        on:change=move |ev| form.update(|f| f.unit_id = event_target_value(&ev))
                    >
                        <option value="">{"— выберите —"}</option>
                        {move || {
                            let selected = form.get().unit_id;
                            unit_options
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
                        field_error(&field_errors.get(), "unitId")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group form-group--row">
                    <div>
                        <label for="price">{"Цена"}</label>
                        <input
                            type="number"
                            id="price"
                            step="0.01"
                            min="0"
                            prop:value=move || form.get().price.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.price = value);
                            }
                        />
                        {move || {
                            field_error(&field_errors.get(), "price")
                                .map(|e| view! { <div class="field-error">{e}</div> })
                        }}
                    </div>
                    <div>
                        <label for="quantity">{"Остаток"}</label>
                        <input
                            type="number"
                            id="quantity"
                            step="0.001"
                            min="0"
                            prop:value=move || form.get().quantity.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.quantity = value);
                            }
                        />
                        {move || {
                            field_error(&field_errors.get(), "quantity")
                                .map(|e| view! { <div class="field-error">{e}</div> })
                        }}
                    </div>
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
