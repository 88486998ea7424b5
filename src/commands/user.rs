//! User Commands

use super::{delete, get, post, QueryParams};
use crate::error::ApiResult;
use crate::models::{ListResponse, User};

pub async fn list_users(params: &QueryParams) -> ApiResult<Vec<User>> {
    let response: ListResponse<User> = get("/users/", params).await?;
    Ok(response.into_vec())
}

/// Soft-deleted users, restorable by an admin
pub async fn list_deleted_users() -> ApiResult<Vec<User>> {
    let response: ListResponse<User> = get("/users/deleted/", &[]).await?;
    Ok(response.into_vec())
}

pub async fn delete_user(id: u32) -> ApiResult<()> {
    delete(&format!("/users/{}/", id)).await
}

pub async fn restore_user(id: u32) -> ApiResult<()> {
    let _: serde_json::Value = post::<_, ()>(&format!("/users/{}/restore/", id), None).await?;
    Ok(())
}
