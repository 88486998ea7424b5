//! Comment Commands

use super::get;
use crate::error::ApiResult;
use crate::models::{Comment, ListResponse};

/// Comments on a task, deleted ones filtered out
pub async fn list_comments(task_id: u32) -> ApiResult<Vec<Comment>> {
    let params = vec![("task_id", task_id.to_string())];
    let response: ListResponse<Comment> = get("/comments/", &params).await?;
    Ok(response.into_vec().into_iter().filter(|c| !c.is_deleted).collect())
}
