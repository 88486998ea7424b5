//! Team Commands

use super::{delete, get};
use crate::error::ApiResult;
use crate::models::{ListResponse, Team};

pub async fn list_teams() -> ApiResult<Vec<Team>> {
    let response: ListResponse<Team> = get("/teams/", &[]).await?;
    Ok(response.into_vec())
}

/// A team with its member list
pub async fn get_team(id: u32) -> ApiResult<Team> {
    get(&format!("/teams/{}/", id), &[]).await
}

pub async fn delete_team(id: u32) -> ApiResult<()> {
    delete(&format!("/teams/{}/", id)).await
}
