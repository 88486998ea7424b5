//! Task Commands
//!
//! Frontend bindings for task listings and task actions.

use super::{delete, get, post, QueryParams};
use crate::error::ApiResult;
use crate::models::{ListResponse, Task};

pub async fn list_tasks(params: &QueryParams) -> ApiResult<Vec<Task>> {
    let response: ListResponse<Task> = get("/tasks/", params).await?;
    Ok(response.into_vec())
}

/// Tasks assigned to the signed-in user
pub async fn list_my_tasks() -> ApiResult<Vec<Task>> {
    let response: ListResponse<Task> = get("/tasks/my-tasks/", &[]).await?;
    Ok(response.into_vec())
}

/// Tasks the signed-in user created
pub async fn list_created_tasks() -> ApiResult<Vec<Task>> {
    let response: ListResponse<Task> = get("/tasks/my-created-tasks/", &[]).await?;
    Ok(response.into_vec())
}

pub async fn list_tasks_for_assignee(assignee_id: u32) -> ApiResult<Vec<Task>> {
    list_tasks(&vec![("assignee_id", assignee_id.to_string())]).await
}

pub async fn get_task(id: u32) -> ApiResult<Task> {
    get(&format!("/tasks/{}/", id), &[]).await
}

pub async fn complete_task(id: u32) -> ApiResult<Task> {
    post::<Task, ()>(&format!("/tasks/{}/complete/", id), None).await
}

pub async fn delete_task(id: u32) -> ApiResult<()> {
    delete(&format!("/tasks/{}/", id)).await
}
