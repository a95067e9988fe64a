use axum::{extract::Json, http::StatusCode, Extension};
use contracts::system::auth::{LoginRequest, LoginResponse, TokenClaims, UserInfo};

use crate::system::{auth::jwt, users};

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    // Verify credentials
    let user = users::verify_credentials(&request.username, &request.password)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = jwt::generate_access_token(&user.id, &user.username)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let response = LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
        },
    };

    Ok(Json(response))
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_user(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = users::get_by_id(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(UserInfo {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
    }))
}
