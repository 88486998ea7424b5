//! Auth Commands
//!
//! Login, logout and the signed-in profile.

use serde::Serialize;

use super::{clear_tokens, get, post, refresh_token, store_tokens};
use crate::error::ApiResult;
use crate::models::{LoginResponse, User};

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
struct LogoutArgs {
    refresh_token: String,
}

/// Sign in and persist the returned tokens
pub async fn login(args: &LoginArgs<'_>) -> ApiResult<User> {
    let response: LoginResponse = post("/auth/login/", Some(args)).await?;
    store_tokens(&response.tokens)?;
    log::info!("[API] signed in as {}", response.user.email);
    Ok(response.user)
}

/// Tell the server to drop the refresh token, then forget both tokens locally
pub async fn logout() {
    if let Some(refresh_token) = refresh_token() {
        let result: ApiResult<serde_json::Value> = post("/auth/logout/", Some(&LogoutArgs { refresh_token })).await;
        if let Err(e) = result {
            log::warn!("[API] logout request failed: {}", e);
        }
    }
    clear_tokens();
}

pub async fn current_user() -> ApiResult<User> {
    get("/auth/profile/", &[]).await
}
