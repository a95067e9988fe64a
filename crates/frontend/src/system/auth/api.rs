use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = api::post_json("/api/system/auth/login", &request).await?;

    if response.status == 401 {
        return Err("Неверное имя пользователя или пароль".to_string());
    }
    if !response.is_success() {
        return Err(format!("Login failed: {}", response.status));
    }

    response.json::<LoginResponse>()
}

/// Get current user info
pub async fn get_current_user() -> Result<UserInfo, String> {
    let response = api::get("/api/system/auth/me").await?;

    if !response.is_success() {
        return Err(format!("Get current user failed: {}", response.status));
    }

    response.json::<UserInfo>()
}
