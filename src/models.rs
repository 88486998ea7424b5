//! Frontend Models
//!
//! Data structures matching the REST API payloads.
//! Loose fields (nullable strings, union role/status names) are validated
//! here at the boundary so the rest of the app works with typed values.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

// ========================
// Enumerations
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Employee,
    Intern,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Employee, Role::Intern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Intern => "intern",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
            Role::Intern => "Intern",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Review,
    Completed,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Todo,
        Status::InProgress,
        Status::Review,
        Status::Completed,
        Status::Cancelled,
    ];

    /// Wire name, also used for lexical status ordering
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Review => "review",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Review => "In Review",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

/// Task priority. Declaration order is the sort order: low < medium < high < urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TaskAssigned,
    TaskUpdated,
    TaskCompleted,
    CommentAdded,
    TeamAdded,
    TeamRemoved,
    DeadlineReminder,
    Mention,
    #[serde(other)]
    General,
}

// ========================
// Entities
// ========================

/// Compact user reference embedded in tasks and comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Compact team reference embedded in tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Compact task reference embedded in notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default)]
    pub team_id: Option<u32>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile_number: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub parent_team_id: Option<u32>,
    #[serde(default)]
    pub team_head_id: Option<u32>,
    #[serde(default)]
    pub team_head_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<User>,
    /// Reported by list endpoints, which leave `members` out
    #[serde(default)]
    pub member_count: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Team {
    pub fn member_count(&self) -> usize {
        self.member_count.map(|n| n as usize).unwrap_or(self.members.len())
    }

    /// `1 member`, `4 members`
    pub fn member_label(&self) -> String {
        match self.member_count() {
            1 => "1 member".to_string(),
            n => format!("{} members", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub assignee: Option<UserSummary>,
    #[serde(default)]
    pub assigner: Option<UserSummary>,
    #[serde(default)]
    pub team: Option<TeamSummary>,
    #[serde(default)]
    pub parent_task_id: Option<u32>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub actual_hours: Option<f64>,
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub completion_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Task {
    pub fn team_id(&self) -> Option<u32> {
        self.team.as_ref().map(|t| t.id)
    }

    pub fn assignee_id(&self) -> Option<u32> {
        self.assignee.as_ref().map(|u| u.id)
    }

    pub fn assigner_id(&self) -> Option<u32> {
        self.assigner.as_ref().map(|u| u.id)
    }

    /// Due date already passed and the task is still open
    pub fn is_past_due(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        let due = crate::filter::timestamp_millis(self.due_date.as_deref());
        due > 0 && due < now.timestamp_millis() && self.status != Status::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub task_id: u32,
    #[serde(default)]
    pub user_details: Option<UserSummary>,
    pub comment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub is_edited: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub related_task: Option<TaskSummary>,
    #[serde(default)]
    pub related_team: Option<TeamSummary>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

// ========================
// API Envelopes
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u32,
}

/// List payload: some endpoints paginate, others return a bare array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Page {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        results: Vec<T>,
    },
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Page { results, .. } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_nulls_become_empty() {
        let json = r#"{
            "id": 7, "title": "Ship", "sub_title": null, "description": null,
            "priority": "urgent", "status": "in_progress",
            "parent_task_id": 3, "due_date": null, "created_at": "2024-05-01T10:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.sub_title, "");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.parent_task_id, Some(3));
        assert_eq!(task.team_id(), None);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id": 1, "title": "x", "priority": "low", "status": "blocked"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_unknown_notification_kind_is_general() {
        let json = r#"{"id": 1, "type": "something_new", "title": "Hi", "is_read": false}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::General);
    }

    #[test]
    fn test_list_response_accepts_both_shapes() {
        let page: ListResponse<TeamSummary> =
            serde_json::from_str(r#"{"count": 1, "next": null, "previous": null, "results": [{"id": 4, "name": "Ops"}]}"#).unwrap();
        assert_eq!(page.into_vec().len(), 1);

        let bare: ListResponse<TeamSummary> = serde_json::from_str(r#"[{"id": 4, "name": "Ops"}, {"id": 5, "name": "Dev"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 2);
    }

    #[test]
    fn test_team_member_count() {
        let listed: Team = serde_json::from_str(r#"{"id": 2, "name": "Ops", "member_count": 1}"#).unwrap();
        assert!(listed.members.is_empty());
        assert_eq!(listed.member_label(), "1 member");

        let detailed: Team = serde_json::from_str(
            r#"{"id": 2, "name": "Ops", "members": [
                {"id": 1, "email": "a@x.io", "name": "A", "role": "manager"},
                {"id": 2, "email": "b@x.io", "name": "B", "role": "intern"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(detailed.member_label(), "2 members");
    }

    #[test]
    fn test_list_response_of_tasks() {
        let page: ListResponse<Task> = serde_json::from_str(
            r#"{"count": 1, "results": [{"id": 7, "title": "Ship", "priority": "high", "status": "review"}]}"#,
        )
        .unwrap();
        let tasks = page.into_vec();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, Status::Review);

        let empty: ListResponse<Task> = serde_json::from_str(r#"{"count": 0, "results": null}"#).unwrap();
        assert!(empty.into_vec().is_empty());
    }

    #[test]
    fn test_is_past_due() {
        use chrono::TimeZone;
        let now = chrono::Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let mut task: Task = serde_json::from_str(
            r#"{"id": 1, "title": "x", "priority": "low", "status": "todo", "due_date": "2024-05-01"}"#,
        )
        .unwrap();
        assert!(task.is_past_due(now));

        task.status = Status::Completed;
        assert!(!task.is_past_due(now));

        task.status = Status::Todo;
        task.due_date = None;
        assert!(!task.is_past_due(now));
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
        assert_eq!(Priority::from_str("high"), Some(Priority::High));
        assert_eq!(Role::from_str("boss"), None);
    }
}
