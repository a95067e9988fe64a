use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::routes::Page;
use crate::shared::icons::icon;
use crate::system::auth::{api, context};

/// Каркас приложения: шапка + боковая навигация + контент
#[component]
pub fn Shell(current_page: RwSignal<Page>, children: Children) -> impl IntoView {
    let auth_state = context::use_auth();

    // Имя пользователя подтягивается после входа
    Effect::new(move |_| {
        if auth_state.get().user.is_none() && auth_state.get_untracked().is_logged_in() {
            spawn_local(async move {
                if let Ok(user) = api::get_current_user().await {
                    auth_state.update(|s| s.user = Some(user));
                }
            });
        }
    });

    let nav_items: Vec<(Page, &'static str, &'static str)> = vec![
        (Page::Projects, "projects", "Проекты"),
        (Page::Contracts, "contracts", "Контракты"),
        (Page::Payments, "payments", "Платежи"),
        (Page::Attachments, "files", "Файлы"),
        (Page::Products, "products", "Товары"),
        (Page::Companies, "companies", "Компании"),
        (Page::Purchasers, "purchasers", "Покупатели"),
        (Page::Units, "units", "Единицы измерения"),
        (Page::Currencies, "currencies", "Валюты"),
    ];

    view! {
        <div class="shell">
            <header class="shell__header">
                <span class="shell__brand">{"Contract Compass"}</span>
                <div class="shell__user">
                    <span class="shell__username">
                        {move || {
                            auth_state
                                .get()
                                .user
                                .map(|u| u.full_name.unwrap_or(u.username))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        class="icon-button"
                        title="Выйти"
                        on:click=move |_| context::logout(auth_state)
                    >
                        {icon("logout")}
                    </button>
                </div>
            </header>
            <div class="shell__body">
                <nav class="shell__sidebar">
                    {nav_items
                        .into_iter()
                        .map(|(page, icon_name, label)| {
                            view! {
                                <button
                                    class="nav-item"
                                    class:nav-item--active=move || current_page.get() == page
                                    on:click=move |_| current_page.set(page)
                                >
                                    {icon(icon_name)}
                                    <span class="nav-item__label">{label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
