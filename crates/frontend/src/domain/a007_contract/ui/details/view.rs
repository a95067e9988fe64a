use leptos::prelude::*;

use super::view_model::ContractDetailsViewModel;
use crate::shared::form::{field_error, SelectOption};
use crate::shared::icons::icon;
use crate::shared::list_view::{DialogCallback, FormMode};
use crate::shared::toast::ToastService;

/// Селектор ссылки на справочник с ошибкой поля
#[component]
fn RefSelect(
    id: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<String>,
    on_select: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select id=id on:change=move |ev| on_select.run(event_target_value(&ev))>
                <option value="">{"— выберите —"}</option>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(option_id, option_label)| {
                            let is_selected = option_id == selected;
                            view! {
                                <option value=option_id.clone() selected=is_selected>
                                    {option_label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ContractDetails(
    mode: FormMode,
    on_saved: DialogCallback,
    on_cancel: DialogCallback,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let vm = ContractDetailsViewModel::new();
    vm.load_reference_data();
    vm.load_if_needed(&mode);

    let is_edit = mode.is_edit();
    let mode_for_save = mode.clone();

    view! {
        <div class="details-container contract-details">
            <div class="details-header">
                <h3>{if is_edit { "Редактирование контракта" } else { "Новый контракт" }}</h3>
            </div>

            {move || vm.load_error.get().map(|e| view! { <div class="error">{e}</div> })}

            // Сводка оплат: видна только по сохранённому контракту
            {move || {
                vm.summary
                    .get()
                    .map(|s| {
                        view! {
                            <div class="summary-box">
                                <span>{format!("Оплачено: {:.2}", s.paid_total)}</span>
                                <span>{format!("Остаток: {:.2}", s.remaining)}</span>
                                <span>{format!("{:.0}% от суммы контракта", s.percent_paid)}</span>
                                <span>{format!("Платежей: {}", s.payments_count)}</span>
                            </div>
                        }
                    })
            }}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Предмет контракта"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Поставка оборудования"
                    />
                    {move || {
                        field_error(&vm.field_errors.get(), "name")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label for="number">{"Номер"}</label>
                    <input
                        type="text"
                        id="number"
                        prop:value=move || vm.form.get().number
                        on:input=move |ev| vm.form.update(|f| f.number = event_target_value(&ev))
                        placeholder="ДГ-2025-001"
                    />
                    {move || {
                        field_error(&vm.field_errors.get(), "number")
                            .map(|e| view! { <div class="field-error">{e}</div> })
                    }}
                </div>

                <RefSelect
                    id="project_id"
                    label="Проект"
                    options=Signal::derive(move || vm.project_options.get())
                    value=Signal::derive(move || vm.form.get().project_id)
                    on_select=Callback::new(move |value| vm.form.update(|f| f.project_id = value))
                    error=Signal::derive(move || {
                        field_error(&vm.field_errors.get(), "projectId")
                    })
                />

                <RefSelect
                    id="company_id"
                    label="Компания-исполнитель"
                    options=Signal::derive(move || vm.company_options.get())
                    value=Signal::derive(move || vm.form.get().company_id)
                    on_select=Callback::new(move |value| vm.form.update(|f| f.company_id = value))
                    error=Signal::derive(move || {
                        field_error(&vm.field_errors.get(), "companyId")
                    })
                />

                <RefSelect
                    id="purchaser_id"
                    label="Покупатель"
                    options=Signal::derive(move || vm.purchaser_options.get())
                    value=Signal::derive(move || vm.form.get().purchaser_id)
                    on_select=Callback::new(move |value| vm.form.update(|f| f.purchaser_id = value))
                    error=Signal::derive(move || {
                        field_error(&vm.field_errors.get(), "purchaserId")
                    })
                />

                <RefSelect
                    id="currency_id"
                    label="Валюта"
                    options=Signal::derive(move || vm.currency_options.get())
                    value=Signal::derive(move || vm.form.get().currency_id)
                    on_select=Callback::new(move |value| vm.form.update(|f| f.currency_id = value))
                    error=Signal::derive(move || {
                        field_error(&vm.field_errors.get(), "currencyId")
                    })
                />

                <div class="form-group form-group--row">
                    <div>
                        <label for="amount">{"Сумма"}</label>
                        <input
                            type="number"
                            id="amount"
                            step="0.01"
                            min="0"
                            prop:value=move || vm.form.get().amount.to_string()
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                vm.form.update(|f| f.amount = value);
                            }
                        />
                        {move || {
                            field_error(&vm.field_errors.get(), "amount")
                                .map(|e| view! { <div class="field-error">{e}</div> })
                        }}
                    </div>
                    <div>
                        <label for="signed_at">{"Дата подписания"}</label>
                        <input
                            type="date"
                            id="signed_at"
                            prop:value=move || vm.form.get().signed_at
                            on:input=move |ev| {
                                vm.form.update(|f| f.signed_at = event_target_value(&ev))
                            }
                        />
                        {move || {
                            field_error(&vm.field_errors.get(), "signedAt")
                                .map(|e| view! { <div class="field-error">{e}</div> })
                        }}
                    </div>
                </div>

                <div class="form-group">
                    <label for="comment">{"Комментарий"}</label>
                    <textarea
                        id="comment"
                        prop:value=move || vm.form.get().comment.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(mode_for_save.clone(), on_saved.clone(), toasts)
                    }
                    disabled=move || vm.saving.get()
                >
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
