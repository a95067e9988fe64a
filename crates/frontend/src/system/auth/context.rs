use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

/// Состояние авторизации приложения
#[derive(Clone, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Положить состояние в контекст (вызывается один раз в корне приложения).
///
/// Токен из прошлой сессии подхватывается из хранилища; сам он не
/// перепроверяется — истёкший токен даст 401 на первом же запросе.
pub fn provide_auth() -> RwSignal<AuthState> {
    let state = RwSignal::new(AuthState {
        token: storage::get_token(),
        user: None,
    });
    provide_context(state);
    state
}

pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthState not provided in context")
}

/// Успешный вход: токен в хранилище + состояние
pub fn login(state: RwSignal<AuthState>, token: String, user: UserInfo) {
    storage::save_token(&token);
    state.set(AuthState {
        token: Some(token),
        user: Some(user),
    });
}

/// Выход: чистим хранилище и состояние
pub fn logout(state: RwSignal<AuthState>) {
    storage::clear_token();
    state.set(AuthState::default());
}
