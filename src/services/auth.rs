//! Auth Service
//!
//! Login and register persist the returned bearer token as a side effect,
//! so the interceptor picks it up on every later request.

use crate::api;
use crate::error::ApiError;
use crate::models::{AuthResponseDto, LoginDto, RegisterDto, UserResponseDto};
use crate::token;

pub async fn login(credentials: &LoginDto) -> Result<AuthResponseDto, ApiError> {
    let response: AuthResponseDto = api::post("/auth/login", credentials).await?;
    token::set_token(&response.token);
    Ok(response)
}

pub async fn register(data: &RegisterDto) -> Result<AuthResponseDto, ApiError> {
    let response: AuthResponseDto = api::post("/auth/register", data).await?;
    token::set_token(&response.token);
    Ok(response)
}

/// Purely local: dropping the token is all it takes to end the session.
pub fn logout() {
    token::remove_token();
}

/// Resolve the user behind the stored token. Refuses locally, before any
/// network call, when no token is stored.
pub async fn get_current_user() -> Result<UserResponseDto, ApiError> {
    if !token::has_token() {
        return Err(ApiError::Unknown("Non authentifié".to_string()));
    }
    api::get("/auth/me").await
}
