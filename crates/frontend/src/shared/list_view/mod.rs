//! Универсальный список: поиск + сортировка + пагинация + CRUD-диалоги.
//!
//! Один и тот же контроллер обслуживает все справочники и журналы:
//! экземпляр собирается из описаний колонок, REST-пути и билдера формы.
//! Управление запросом живёт в одном сигнале `ListQuery`; смена критериев
//! поиска или сортировки возвращает на первую страницу, смена страницы —
//! нет. Каждая загрузка несёт номер поколения: ответ, чьё поколение уже не
//! текущее, отбрасывается.

pub mod columns;
pub mod pagination;

pub use columns::Column;
pub use pagination::PaginationBar;

use contracts::shared::query::{ListQuery, Page};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, toggle_sort};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;

/// Явный режим формы диалога
#[derive(Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Колбэки закрытия диалога
pub type DialogCallback = Arc<dyn Fn() + Send + Sync>;

/// Билдер формы диалога: (режим, on_saved, on_cancel) -> view
pub type DetailsBuilder =
    Arc<dyn Fn(FormMode, DialogCallback, DialogCallback) -> AnyView + Send + Sync>;

/// Конфигурация экземпляра списка
#[derive(Clone)]
pub struct ListViewConfig<T> {
    /// Заголовок страницы (множественное число)
    pub title: &'static str,
    /// Название записи в диалоге удаления (единственное число)
    pub element_name: &'static str,
    /// REST-путь коллекции ("/api/unit")
    pub base_path: &'static str,
    pub columns: Vec<Column<T>>,
    /// (поле, подпись) для селектора "искать по"; первое — поле по умолчанию
    pub search_fields: Vec<(&'static str, &'static str)>,
    pub default_sort_by: &'static str,
    /// Фиксированная пара query-параметров, добавляемая к каждому запросу
    pub scope: Option<(&'static str, String)>,
    pub row_id: Arc<dyn Fn(&T) -> String + Send + Sync>,
    pub row_name: Arc<dyn Fn(&T) -> String + Send + Sync>,
    pub details: DetailsBuilder,
    /// Стиль поверхности модального окна деталей
    pub dialog_style: &'static str,
}

#[component]
#[allow(non_snake_case)]
pub fn ListView<T>(config: ListViewConfig<T>) -> impl IntoView
where
    T: Clone + Send + Sync + serde::de::DeserializeOwned + 'static,
{
    let ListViewConfig {
        title,
        element_name,
        base_path,
        columns,
        search_fields,
        default_sort_by,
        scope,
        row_id,
        row_name,
        details,
        dialog_style,
    } = config;

    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let initial_query = ListQuery {
        search_by: search_fields
            .first()
            .map(|(field, _)| (*field).to_string())
            .unwrap_or_else(|| "name".to_string()),
        sort_by: default_sort_by.to_string(),
        ..ListQuery::default()
    };

    let (query, set_query) = signal(initial_query);
    let (data, set_data) = signal(Page::<T>::empty());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Счётчик поколений запросов: поздно пришедший устаревший ответ
    // не перетирает данные более нового
    let generation = StoredValue::new(0u64);

    let scope_for_fetch = scope.clone();
    let fetch = Callback::new(move |_: ()| {
        let q = query.get_untracked();
        let scope = scope_for_fetch.clone();
        let current_gen = generation.get_value() + 1;
        generation.set_value(current_gen);

        spawn_local(async move {
            set_loading.set(true);

            let result = api::get_page(base_path, &q, scope.as_ref()).await;

            if generation.get_value() != current_gen {
                return;
            }
            set_loading.set(false);

            match result {
                Ok(response) if response.is_success() => match response.json::<Page<T>>() {
                    Ok(page) => {
                        set_data.set(page);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                },
                Ok(response) if response.status >= 500 => {
                    toasts.error("Сервис недоступен, попробуйте позже");
                    set_error.set(Some(format!("HTTP {}", response.status)));
                }
                Ok(response) => {
                    set_error.set(Some(response.form_errors().message));
                }
                Err(e) => {
                    toasts.error("Не удалось загрузить данные");
                    set_error.set(Some(e));
                }
            }
        });
    });

    // Загрузка при монтировании и при каждом изменении параметров
    Effect::new(move |_| {
        query.track();
        fetch.run(());
    });

    // Сеттеры критериев сбрасывают страницу; сеттер страницы — нет
    let on_search_value = Callback::new(move |value: String| {
        set_query.update(|q| {
            q.search_value = value;
            q.page = 1;
        });
    });

    let on_search_by = Callback::new(move |field: String| {
        set_query.update(|q| {
            q.search_by = field;
            q.page = 1;
        });
    });

    let on_sort = Callback::new(move |field: &'static str| {
        set_query.update(|q| toggle_sort(q, field));
    });

    let on_page_change = Callback::new(move |page: u64| {
        set_query.update(|q| q.page = page);
    });

    // Диалог создания/редактирования через общий стек модалок
    let details_for_open = details.clone();
    let open_details = Callback::new(move |mode: FormMode| {
        let details = details_for_open.clone();
        modal_stack.push_with_frame(Some(dialog_style.to_string()), move |handle| {
            let on_saved: DialogCallback = Arc::new({
                let handle = handle.clone();
                move || {
                    handle.close();
                    fetch.run(());
                }
            });
            let on_cancel: DialogCallback = Arc::new({
                let handle = handle.clone();
                move || handle.close()
            });
            (details)(mode.clone(), on_saved, on_cancel)
        });
    });

    // Диалог подтверждения удаления
    let confirm_delete = Callback::new(move |(id, display_name): (String, String)| {
        modal_stack.push_with_frame(
            Some("max-width: 440px; width: 440px;".to_string()),
            move |handle| {
                let id = id.clone();
                let display_name = display_name.clone();

                let do_delete = {
                    let handle = handle.clone();
                    move |_| {
                        let id = id.clone();
                        let handle = handle.clone();
                        spawn_local(async move {
                            match api::delete(&format!("{}/{}", base_path, id)).await {
                                Ok(response) if response.is_success() => {
                                    handle.close();
                                    toasts.success("Запись удалена");
                                    fetch.run(());
                                }
                                Ok(response) if response.status == 409 => {
                                    // Ссылочный конфликт: сообщение сервера как есть,
                                    // коллекция не перезагружается
                                    handle.close();
                                    toasts.error(response.form_errors().message);
                                }
                                Ok(response) => {
                                    handle.close();
                                    toasts.error(response.form_errors().message);
                                }
                                Err(_) => {
                                    handle.close();
                                    toasts.error("Непредвиденная ошибка, попробуйте позже");
                                }
                            }
                        });
                    }
                };

                let cancel = {
                    let handle = handle.clone();
                    move |_| handle.close()
                };

                view! {
                    <div class="confirm-dialog">
                        <h3 class="confirm-dialog__title">{format!("Удаление — {}", element_name)}</h3>
                        <p class="confirm-dialog__text">
                            {format!("\"{}\" будет удалено без возможности восстановления.", display_name)}
                        </p>
                        <div class="confirm-dialog__actions">
                            <button class="btn btn-danger" on:click=do_delete>
                                {icon("delete")}
                                {"Удалить"}
                            </button>
                            <button class="btn btn-secondary" on:click=cancel>
                                {"Отмена"}
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            },
        );
    });

    let column_count = columns.len() + 1;
    let columns_for_body = columns.clone();
    let row_id_for_body = row_id.clone();
    let row_name_for_body = row_name.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| open_details.run(FormMode::Create)
                    >
                        {icon("plus")}
                        {"Добавить"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch.run(())>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="list-filter">
                <label class="list-filter__label">{"Искать по:"}</label>
                <select
                    class="list-filter__select"
                    on:change=move |ev| on_search_by.run(event_target_value(&ev))
                >
                    {search_fields
                        .iter()
                        .map(|(field, label)| {
                            view! { <option value={*field}>{*label}</option> }
                        })
                        .collect_view()}
                </select>
                <SearchBox on_change=on_search_value />
                <span class="list-filter__count">
                    {move || format!("Всего: {}", data.get().count)}
                </span>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{e}</span>
                            </div>
                        }
                    })
            }}

            {move || {
                loading
                    .get()
                    .then(|| view! { <div class="loading-row">{"Загрузка данных..."}</div> })
            }}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns
                                .iter()
                                .map(|col| {
                                    let field = col.field;
                                    let label = col.label;
                                    let sortable = col.sortable;
                                    let align_right = col.align_right;
                                    view! {
                                        <th
                                            class="table__header-cell"
                                            class:table__header-cell--right=align_right
                                            class:table__header-cell--sortable=sortable
                                            on:click=move |_| {
                                                if sortable {
                                                    on_sort.run(field);
                                                }
                                            }
                                        >
                                            {move || {
                                                if sortable {
                                                    let q = query.get();
                                                    format!(
                                                        "{}{}",
                                                        label,
                                                        get_sort_indicator(&q.sort_by, field, q.sort_type),
                                                    )
                                                } else {
                                                    label.to_string()
                                                }
                                            }}
                                        </th>
                                    }
                                })
                                .collect_view()}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let page = data.get();
                            if page.rows.is_empty() {
                                // Пустой поиск и пустой справочник — разные состояния
                                let message = if query.get().has_search() {
                                    "Ничего не найдено по запросу"
                                } else {
                                    "Нет данных"
                                };
                                view! {
                                    <tr>
                                        <td class="table__empty" colspan=column_count.to_string()>{message}</td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                let columns = columns_for_body.clone();
                                let row_id = row_id_for_body.clone();
                                let row_name = row_name_for_body.clone();
                                page.rows
                                    .into_iter()
                                    .map(|row| {
                                        let id = (row_id)(&row);
                                        let display_name = (row_name)(&row);
                                        let id_for_edit = id.clone();
                                        let id_for_delete = id.clone();
                                        view! {
                                            <tr
                                                class="table__row"
                                                on:click=move |_| {
                                                    open_details.run(FormMode::Edit(id_for_edit.clone()))
                                                }
                                            >
                                                {columns
                                                    .iter()
                                                    .map(|col| {
                                                        let value = (col.cell)(&row);
                                                        view! {
                                                            <td
                                                                class="table__cell"
                                                                class:table__cell--right=col.align_right
                                                            >
                                                                {value}
                                                            </td>
                                                        }
                                                    })
                                                    .collect_view()}
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="icon-button icon-button--danger"
                                                        title="Удалить"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            confirm_delete
                                                                .run((id_for_delete.clone(), display_name.clone()));
                                                        }
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationBar
                current_page=Signal::derive(move || query.get().page)
                count=Signal::derive(move || data.get().count)
                limit=Signal::derive(move || query.get().limit)
                on_page_change=on_page_change
            />
        </div>
    }
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
fn SearchBox(on_change: Callback<String>) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let debounce_generation = StoredValue::new(0u64);

    let handle_input = move |value: String| {
        set_input_value.set(value.clone());

        let current = debounce_generation.get_value() + 1;
        debounce_generation.set_value(current);

        spawn_local(async move {
            TimeoutFuture::new(300).await;
            // Срабатывает только последний ввод за окно debounce
            if debounce_generation.get_value() == current {
                on_change.run(value);
            }
        });
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        debounce_generation.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-box__input"
                placeholder="Поиск..."
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || {
                (!input_value.get().is_empty())
                    .then(|| {
                        view! {
                            <button class="search-box__clear" title="Очистить" on:click=clear>
                                {icon("x")}
                            </button>
                        }
                    })
            }}
        </div>
    }
}
