//! API client for frontend-backend communication.
//!
//! Единственное место, читающее токен авторизации: страницы и view-model'и
//! ходят на сервер только через этот модуль. Чтения — с одним автоматическим
//! повтором; мутации не повторяются никогда (двойной side effect хуже
//! ошибки).

use contracts::shared::query::ListQuery;
use contracts::shared::validation::FormErrors;
use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Ответ сервера: статус плюс тело как текст.
///
/// Не-2xx ответы не превращаются в Err — вызывающая сторона ветвится по
/// статусу (422 — ошибки формы, 409 — конфликт, прочее — toast). Err — только
/// отказ транспорта.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_str(&self.body).map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Тело ошибки в формате `{message, details}`; на прочий мусор —
    /// синтетический конверт с кодом статуса
    pub fn form_errors(&self) -> FormErrors {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|_| FormErrors::message_only(format!("HTTP {}", self.status)))
    }
}

fn build(method: Method, url: &str) -> RequestBuilder {
    let builder = RequestBuilder::new(url)
        .method(method)
        .header("Accept", "application/json");

    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn send_once(method: Method, url: &str, json_body: Option<&str>) -> Result<ApiResponse, String> {
    let builder = build(method, url);

    let request = match json_body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .map_err(|e| format!("Failed to build request: {}", e))?,
        None => builder
            .build()
            .map_err(|e| format!("Failed to build request: {}", e))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Ok(ApiResponse { status, body })
}

/// GET с одним автоматическим повтором (отказ транспорта или 5xx)
pub async fn get(path: &str) -> Result<ApiResponse, String> {
    let url = format!("{}{}", api_base(), path);

    match send_once(Method::GET, &url, None).await {
        Ok(response) if response.status < 500 => Ok(response),
        _ => send_once(Method::GET, &url, None).await,
    }
}

/// GET страницы коллекции: параметры запроса + фиксированный фильтр области
pub async fn get_page(
    base_path: &str,
    query: &ListQuery,
    scope: Option<&(&'static str, String)>,
) -> Result<ApiResponse, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    let path = match scope {
        Some((key, value)) => format!("{}?{}&{}={}", base_path, qs, key, value),
        None => format!("{}?{}", base_path, qs),
    };
    get(&path).await
}

/// POST JSON — без повторов
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<ApiResponse, String> {
    let url = format!("{}{}", api_base(), path);
    let json = serde_json::to_string(body).map_err(|e| format!("Failed to serialize: {}", e))?;
    send_once(Method::POST, &url, Some(&json)).await
}

/// PATCH JSON — без повторов
pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<ApiResponse, String> {
    let url = format!("{}{}", api_base(), path);
    let json = serde_json::to_string(body).map_err(|e| format!("Failed to serialize: {}", e))?;
    send_once(Method::PATCH, &url, Some(&json)).await
}

/// DELETE — без повторов
pub async fn delete(path: &str) -> Result<ApiResponse, String> {
    let url = format!("{}{}", api_base(), path);
    send_once(Method::DELETE, &url, None).await
}

/// GET бинарного содержимого (выгрузка вложения)
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, String> {
    let url = format!("{}{}", api_base(), path);

    let request = build(Method::GET, &url)
        .build()
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !(200..300).contains(&response.status()) {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Multipart-загрузка файла — без повторов
pub async fn upload(path: &str, form: web_sys::FormData) -> Result<ApiResponse, String> {
    let url = format!("{}{}", api_base(), path);

    let request = build(Method::POST, &url)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Ok(ApiResponse { status, body })
}
