//! Notification Commands

use super::{config, get, post};
use crate::error::ApiResult;
use crate::models::{ListResponse, Notification, UnreadCount};

pub async fn list_notifications() -> ApiResult<Vec<Notification>> {
    let params = vec![("page_size", config().page_size.to_string())];
    let response: ListResponse<Notification> = get("/notifications/", &params).await?;
    Ok(response.into_vec())
}

pub async fn mark_notification_read(id: u32) -> ApiResult<()> {
    let _: serde_json::Value = post::<_, ()>(&format!("/notifications/{}/mark_read/", id), None).await?;
    Ok(())
}

pub async fn mark_all_notifications_read() -> ApiResult<()> {
    let _: serde_json::Value = post::<_, ()>("/notifications/mark_all_read/", None).await?;
    Ok(())
}

pub async fn unread_count() -> ApiResult<u32> {
    let response: UnreadCount = get("/notifications/unread-count/", &[]).await?;
    Ok(response.unread_count)
}
