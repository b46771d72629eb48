//! API Client Plumbing
//!
//! A thin layer over reqwest shared by every domain service: base URL
//! resolution, the fixed request timeout, bearer-token injection, and the
//! error normalization funnel. Every failure a service can see is an
//! [`ApiError`]; raw transport errors never leave this module.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ValidationError};
use crate::token;

pub const DEFAULT_API_URL: &str = "http://localhost:3500/api/v1";

/// Fixed request timeout (10 seconds)
pub const API_TIMEOUT_MS: u64 = 10_000;

/// Resolve the API base URL. On wasm the environment is baked in at build
/// time; on native targets (the test suite) it is read at runtime.
pub fn api_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        option_env!("TASKFLOW_API_URL").unwrap_or(DEFAULT_API_URL).to_string()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("TASKFLOW_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(API_TIMEOUT_MS))
        .build()
        .unwrap_or_default()
}

// The fetch-backed builder has no timeout knob; the deadline is enforced by
// racing the request in `send` instead.
#[cfg(target_arch = "wasm32")]
fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

fn request(method: Method, path: &str) -> reqwest::RequestBuilder {
    let url = format!(
        "{}/{}",
        api_base_url().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut builder = http_client().request(method, url).header("Accept", "application/json");
    if let Some(bearer) = token::get_token() {
        builder = builder.header("Authorization", format!("Bearer {}", bearer));
    }
    builder
}

#[cfg(not(target_arch = "wasm32"))]
async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    builder.send().await.map_err(|error| ApiError::Transport(error.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    use futures_util::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let request = std::pin::pin!(builder.send());
    let deadline = std::pin::pin!(TimeoutFuture::new(API_TIMEOUT_MS as u32));
    match select(request, deadline).await {
        Either::Left((result, _)) => {
            result.map_err(|error| ApiError::Transport(error.to_string()))
        }
        Either::Right(_) => Err(ApiError::Transport(format!(
            "aucune réponse après {} ms",
            API_TIMEOUT_MS
        ))),
    }
}

/// Failure body shape used by the API: `{ message?, errors? }`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ValidationError>,
}

/// Build the tagged error for a non-success response. A populated `errors`
/// array outranks everything; an empty message is treated as absent so the
/// per-status sentence applies.
fn error_from_response(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if !parsed.errors.is_empty() {
        return ApiError::Validation { status, errors: parsed.errors };
    }
    ApiError::Server {
        status,
        message: parsed.message.filter(|message| !message.is_empty()),
    }
}

async fn into_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|error| ApiError::Unknown(error.to_string()));
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_from_response(status.as_u16(), &body))
}

async fn into_empty(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_from_response(status.as_u16(), &body))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(request(Method::GET, path)).await?;
    into_json(response).await
}

pub async fn get_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let response = send(request(Method::GET, path).query(query)).await?;
    into_json(response).await
}

pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(request(Method::POST, path).json(body)).await?;
    into_json(response).await
}

pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(request(Method::PATCH, path).json(body)).await?;
    into_json(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = send(request(Method::DELETE, path)).await?;
    into_empty(response).await
}
