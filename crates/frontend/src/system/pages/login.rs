use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::system::auth::{api, context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_state = context::use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move || {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Введите имя пользователя и пароль".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::login(user, pass).await {
                Ok(response) => {
                    context::login(auth_state, response.token, response.user);
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">{"Contract Compass"}</h1>
                <p class="login-card__subtitle">{"Управление проектами и контрактами"}</p>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="login-card__error">{e}</div> })
                }}

                <div class="form-group">
                    <label for="username">{"Имя пользователя"}</label>
                    <input
                        type="text"
                        id="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Пароль"}</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                </div>

                <button
                    class="button button--primary login-card__submit"
                    disabled=move || submitting.get()
                    on:click=move |_| submit()
                >
                    {move || if submitting.get() { "Вход..." } else { "Войти" }}
                </button>
            </div>
        </div>
    }
}
