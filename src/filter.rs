//! Filter and Sort
//!
//! Narrows and orders flat entity lists before they are turned into a tree.
//! An unset criterion places no constraint. Filtering never re-parents:
//! a child whose parent was filtered out shows up as a root afterwards.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};

use crate::models::{Priority, Role, Status, Task, Team, User, UserSummary};
use crate::permissions::NavItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// A sortable field of some entity kind
pub trait SortField: Copy + PartialEq + 'static {
    const ALL: &'static [Self];
    fn as_str(&self) -> &'static str;
}

/// Single-key sort. Tie order is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Option value as used by the sort dropdown, e.g. `due_date_asc`
    pub fn to_key(&self) -> String {
        format!("{}_{}", self.field.as_str(), self.direction.as_str())
    }

    pub fn parse(key: &str) -> Option<Self> {
        let (field, direction) = key.rsplit_once('_')?;
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        let field = F::ALL.iter().copied().find(|f| f.as_str() == field)?;
        Some(Self { field, direction })
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lowercased, trimmed query or None when there is nothing to search for
fn normalized_query(search: &str) -> Option<String> {
    let q = search.trim();
    (!q.is_empty()).then(|| q.to_lowercase())
}

/// Milliseconds since the epoch for RFC 3339 timestamps or plain dates.
/// Anything unparseable counts as the epoch.
pub fn timestamp_millis(value: Option<&str>) -> i64 {
    let Some(value) = value else { return 0 };
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.timestamp_millis();
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

// ========================
// Tasks
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub search: String,
    pub team_id: Option<u32>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<u32>,
    pub overdue_only: bool,
}

impl TaskFilter {
    /// Any field constraint set; search text is not counted
    pub fn is_active(&self) -> bool {
        self.team_id.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.assignee_id.is_some()
            || self.overdue_only
    }

    /// Drop every field constraint but keep the search text
    pub fn clear_fields(&mut self) {
        *self = TaskFilter {
            search: std::mem::take(&mut self.search),
            ..Default::default()
        };
    }

    fn matches(&self, task: &Task, query: Option<&str>) -> bool {
        if self.team_id.is_some() && task.team_id() != self.team_id {
            return false;
        }
        if self.status.is_some_and(|s| task.status != s) {
            return false;
        }
        if self.priority.is_some_and(|p| task.priority != p) {
            return false;
        }
        if self.assignee_id.is_some() && task.assignee_id() != self.assignee_id {
            return false;
        }
        if self.overdue_only && !task.is_overdue {
            return false;
        }
        match query {
            Some(q) => contains_ci(&task.title, q) || contains_ci(&task.sub_title, q) || contains_ci(&task.description, q),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortField {
    Title,
    DueDate,
    CreatedAt,
    Priority,
    Status,
}

impl SortField for TaskSortField {
    const ALL: &'static [Self] = &[
        TaskSortField::Title,
        TaskSortField::DueDate,
        TaskSortField::CreatedAt,
        TaskSortField::Priority,
        TaskSortField::Status,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TaskSortField::Title => "title",
            TaskSortField::DueDate => "due_date",
            TaskSortField::CreatedAt => "created_at",
            TaskSortField::Priority => "priority",
            TaskSortField::Status => "status",
        }
    }
}

/// Dropdown options for task sorting (value, label)
pub const TASK_SORT_OPTIONS: &[(&str, &str)] = &[
    ("due_date_asc", "Due Date (Earliest)"),
    ("due_date_desc", "Due Date (Latest)"),
    ("created_at_desc", "Created Date (Newest)"),
    ("created_at_asc", "Created Date (Oldest)"),
    ("priority_desc", "Priority (High-Low)"),
    ("priority_asc", "Priority (Low-High)"),
    ("status_asc", "Status (A-Z)"),
    ("status_desc", "Status (Z-A)"),
    ("title_asc", "Title (A-Z)"),
    ("title_desc", "Title (Z-A)"),
];

/// Sort a task page opens with
pub fn default_task_sort(page: NavItem) -> SortSpec<TaskSortField> {
    match page {
        NavItem::Dashboard | NavItem::CreatedTasks => SortSpec::new(TaskSortField::CreatedAt, SortDirection::Desc),
        _ => SortSpec::new(TaskSortField::DueDate, SortDirection::Asc),
    }
}

fn compare_tasks(a: &Task, b: &Task, field: TaskSortField) -> Ordering {
    match field {
        TaskSortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        TaskSortField::DueDate => {
            timestamp_millis(a.due_date.as_deref()).cmp(&timestamp_millis(b.due_date.as_deref()))
        }
        TaskSortField::CreatedAt => {
            timestamp_millis(Some(&a.created_at)).cmp(&timestamp_millis(Some(&b.created_at)))
        }
        TaskSortField::Priority => a.priority.cmp(&b.priority),
        TaskSortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

pub fn filter_and_sort_tasks(tasks: Vec<Task>, filter: &TaskFilter, sort: &SortSpec<TaskSortField>) -> Vec<Task> {
    let query = normalized_query(&filter.search);
    let mut out: Vec<Task> = tasks
        .into_iter()
        .filter(|t| filter.matches(t, query.as_deref()))
        .collect();
    out.sort_by(|a, b| sort.direction.apply(compare_tasks(a, b, sort.field)));
    out
}

/// Distinct assignees of a task list, by name, for the assignee dropdown
pub fn task_assignees(tasks: &[Task]) -> Vec<UserSummary> {
    let mut seen = std::collections::HashSet::new();
    let mut out: Vec<UserSummary> = tasks
        .iter()
        .filter_map(|t| t.assignee.as_ref())
        .filter(|u| seen.insert(u.id))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    out
}

// ========================
// Users
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    pub role: Option<Role>,
    pub team_id: Option<u32>,
}

impl UserFilter {
    fn matches(&self, user: &User, query: Option<&str>) -> bool {
        if self.role.is_some_and(|r| user.role != r) {
            return false;
        }
        if self.team_id.is_some() && user.team_id != self.team_id {
            return false;
        }
        match query {
            Some(q) => {
                contains_ci(&user.name, q)
                    || contains_ci(&user.email, q)
                    || contains_ci(&user.position, q)
                    || user.role.as_str().contains(q)
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Name,
    Role,
    Position,
}

impl SortField for UserSortField {
    const ALL: &'static [Self] = &[UserSortField::Name, UserSortField::Role, UserSortField::Position];

    fn as_str(&self) -> &'static str {
        match self {
            UserSortField::Name => "name",
            UserSortField::Role => "role",
            UserSortField::Position => "position",
        }
    }
}

fn compare_users(a: &User, b: &User, field: UserSortField) -> Ordering {
    match field {
        UserSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        UserSortField::Role => a.role.as_str().cmp(b.role.as_str()),
        UserSortField::Position => a.position.to_lowercase().cmp(&b.position.to_lowercase()),
    }
}

pub fn filter_and_sort_users(users: Vec<User>, filter: &UserFilter, sort: &SortSpec<UserSortField>) -> Vec<User> {
    let query = normalized_query(&filter.search);
    let mut out: Vec<User> = users
        .into_iter()
        .filter(|u| filter.matches(u, query.as_deref()))
        .collect();
    out.sort_by(|a, b| sort.direction.apply(compare_users(a, b, sort.field)));
    out
}

// ========================
// Teams
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSortField {
    Name,
    CreatedAt,
}

impl SortField for TeamSortField {
    const ALL: &'static [Self] = &[TeamSortField::Name, TeamSortField::CreatedAt];

    fn as_str(&self) -> &'static str {
        match self {
            TeamSortField::Name => "name",
            TeamSortField::CreatedAt => "created_at",
        }
    }
}

pub const TEAM_SORT_OPTIONS: &[(&str, &str)] = &[
    ("name_asc", "Name (A-Z)"),
    ("name_desc", "Name (Z-A)"),
    ("created_at_desc", "Newest"),
    ("created_at_asc", "Oldest"),
];

/// Team search over name and description
pub fn filter_and_sort_teams(teams: Vec<Team>, search: &str, sort: &SortSpec<TeamSortField>) -> Vec<Team> {
    let query = normalized_query(search);
    let mut out: Vec<Team> = teams
        .into_iter()
        .filter(|t| match query.as_deref() {
            Some(q) => contains_ci(&t.name, q) || contains_ci(&t.description, q),
            None => true,
        })
        .collect();
    out.sort_by(|a, b| {
        let ord = match sort.field {
            TeamSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            TeamSortField::CreatedAt => {
                timestamp_millis(Some(&a.created_at)).cmp(&timestamp_millis(Some(&b.created_at)))
            }
        };
        sort.direction.apply(ord)
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamSummary;
    use crate::tree::build_forest;

    fn make_task(id: u32, parent: Option<u32>, status: Status, priority: Priority) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            sub_title: String::new(),
            description: String::new(),
            priority,
            status,
            assignee: None,
            assigner: None,
            team: None,
            parent_task_id: parent,
            due_date: None,
            start_date: None,
            estimated_hours: None,
            actual_hours: None,
            is_overdue: false,
            completion_percentage: 0.0,
            created_at: format!("2024-01-{:02}T09:00:00Z", id),
            updated_at: String::new(),
        }
    }

    fn make_user(id: u32, name: &str, role: Role, team_id: Option<u32>) -> User {
        User {
            id,
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            username: name.to_lowercase(),
            role,
            position: String::new(),
            team_id,
            team_name: None,
            mobile_number: String::new(),
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn by_created_desc() -> SortSpec<TaskSortField> {
        SortSpec::new(TaskSortField::CreatedAt, SortDirection::Desc)
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let tasks = vec![
            make_task(1, None, Status::Todo, Priority::Low),
            make_task(2, None, Status::Completed, Priority::High),
        ];
        let filter = TaskFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter_and_sort_tasks(tasks, &filter, &by_created_desc()).len(), 2);
    }

    #[test]
    fn test_status_filter_then_tree() {
        let tasks = vec![
            make_task(1, None, Status::Todo, Priority::Low),
            make_task(2, Some(1), Status::Completed, Priority::Low),
        ];
        let filter = TaskFilter { status: Some(Status::Completed), ..Default::default() };
        let result = filter_and_sort_tasks(tasks, &filter, &by_created_desc());
        assert_eq!(ids(&result), vec![2]);

        // Parent is gone, so the child becomes a root
        let forest = build_forest(result);
        assert_eq!(forest.root_ids(), vec![2]);
    }

    #[test]
    fn test_priority_sort_uses_rank() {
        let tasks = vec![
            make_task(1, None, Status::Todo, Priority::Low),
            make_task(2, None, Status::Todo, Priority::Urgent),
            make_task(3, None, Status::Todo, Priority::Medium),
        ];
        let sort = SortSpec::new(TaskSortField::Priority, SortDirection::Desc);
        let result = filter_and_sort_tasks(tasks, &TaskFilter::default(), &sort);
        let order: Vec<Priority> = result.iter().map(|t| t.priority).collect();
        assert_eq!(order, vec![Priority::Urgent, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut foo = make_task(1, None, Status::Todo, Priority::Low);
        foo.title = "Foobar".to_string();
        let mut other = make_task(2, None, Status::Todo, Priority::Low);
        other.description = "mentions FOO somewhere".to_string();
        let none = make_task(3, None, Status::Todo, Priority::Low);

        let filter = TaskFilter { search: "foo".to_string(), ..Default::default() };
        let mut result = ids(&filter_and_sort_tasks(vec![foo, other, none], &filter, &by_created_desc()));
        result.sort();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_team_and_overdue_filters() {
        let mut a = make_task(1, None, Status::Todo, Priority::Low);
        a.team = Some(TeamSummary { id: 4, name: "Ops".to_string() });
        a.is_overdue = true;
        let mut b = make_task(2, None, Status::Todo, Priority::Low);
        b.team = Some(TeamSummary { id: 5, name: "Dev".to_string() });
        b.is_overdue = true;
        let c = make_task(3, None, Status::Todo, Priority::Low);

        let filter = TaskFilter { team_id: Some(4), ..Default::default() };
        assert_eq!(ids(&filter_and_sort_tasks(vec![a.clone(), b.clone(), c.clone()], &filter, &by_created_desc())), vec![1]);

        let filter = TaskFilter { overdue_only: true, ..Default::default() };
        assert_eq!(ids(&filter_and_sort_tasks(vec![a, b, c], &filter, &by_created_desc())), vec![2, 1]);
    }

    #[test]
    fn test_due_date_missing_sorts_first() {
        let mut a = make_task(1, None, Status::Todo, Priority::Low);
        a.due_date = Some("2024-06-01".to_string());
        let b = make_task(2, None, Status::Todo, Priority::Low);
        let mut c = make_task(3, None, Status::Todo, Priority::Low);
        c.due_date = Some("2024-03-01T12:00:00+02:00".to_string());

        let sort = SortSpec::new(TaskSortField::DueDate, SortDirection::Asc);
        assert_eq!(ids(&filter_and_sort_tasks(vec![a, b, c], &TaskFilter::default(), &sort)), vec![2, 3, 1]);
    }

    #[test]
    fn test_status_sorts_by_wire_name() {
        let tasks = vec![
            make_task(1, None, Status::Todo, Priority::Low),
            make_task(2, None, Status::Cancelled, Priority::Low),
            make_task(3, None, Status::InProgress, Priority::Low),
        ];
        let sort = SortSpec::new(TaskSortField::Status, SortDirection::Asc);
        assert_eq!(ids(&filter_and_sort_tasks(tasks, &TaskFilter::default(), &sort)), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_key_round_trip() {
        let spec = SortSpec::<TaskSortField>::parse("due_date_desc").unwrap();
        assert_eq!(spec.field, TaskSortField::DueDate);
        assert_eq!(spec.direction, SortDirection::Desc);
        assert!(SortSpec::<TaskSortField>::parse("due_date_sideways").is_none());
        assert!(SortSpec::<TaskSortField>::parse("color_asc").is_none());
        for (key, _) in TASK_SORT_OPTIONS {
            assert_eq!(SortSpec::<TaskSortField>::parse(key).unwrap().to_key(), *key);
        }
    }

    #[test]
    fn test_assignee_filter_and_choices() {
        let person = |id: u32, name: &str| UserSummary { id, name: name.to_string(), email: String::new() };
        let mut a = make_task(1, None, Status::Todo, Priority::Low);
        a.assignee = Some(person(8, "zoe"));
        let mut b = make_task(2, None, Status::Todo, Priority::Low);
        b.assignee = Some(person(5, "Ana"));
        let mut c = make_task(3, None, Status::Todo, Priority::Low);
        c.assignee = Some(person(8, "zoe"));
        let d = make_task(4, None, Status::Todo, Priority::Low);
        let tasks = vec![a, b, c, d];

        let choices: Vec<u32> = task_assignees(&tasks).iter().map(|u| u.id).collect();
        assert_eq!(choices, vec![5, 8]);

        let filter = TaskFilter { assignee_id: Some(8), ..Default::default() };
        assert!(filter.is_active());
        let hits = filter_and_sort_tasks(tasks, &filter, &by_created_desc());
        assert_eq!(ids(&hits), vec![3, 1]);
    }

    #[test]
    fn test_default_sort_per_page() {
        assert_eq!(default_task_sort(NavItem::Dashboard).to_key(), "created_at_desc");
        assert_eq!(default_task_sort(NavItem::CreatedTasks).to_key(), "created_at_desc");
        assert_eq!(default_task_sort(NavItem::MyTasks).to_key(), "due_date_asc");
        assert_eq!(default_task_sort(NavItem::TeamView).to_key(), "due_date_asc");
    }

    #[test]
    fn test_clear_fields_keeps_search() {
        let mut filter = TaskFilter {
            search: "report".to_string(),
            status: Some(Status::Review),
            team_id: Some(2),
            ..Default::default()
        };
        filter.clear_fields();
        assert_eq!(filter.search, "report");
        assert!(filter.status.is_none());
        assert!(filter.team_id.is_none());
    }

    #[test]
    fn test_user_filter_and_sort() {
        let mut carol = make_user(3, "carol", Role::Manager, Some(1));
        carol.position = "Lead Designer".to_string();
        let users = vec![
            make_user(1, "Bob", Role::Employee, Some(1)),
            make_user(2, "alice", Role::Intern, Some(2)),
            carol,
        ];

        let sort = SortSpec::new(UserSortField::Name, SortDirection::Asc);
        let names: Vec<String> = filter_and_sort_users(users.clone(), &UserFilter::default(), &sort)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["alice", "Bob", "carol"]);

        let filter = UserFilter { search: "designer".to_string(), ..Default::default() };
        assert_eq!(filter_and_sort_users(users.clone(), &filter, &sort).len(), 1);

        let filter = UserFilter { search: "INTERN".to_string(), ..Default::default() };
        assert_eq!(filter_and_sort_users(users.clone(), &filter, &sort)[0].id, 2);

        let filter = UserFilter { team_id: Some(1), role: Some(Role::Employee), ..Default::default() };
        assert_eq!(filter_and_sort_users(users, &filter, &sort)[0].id, 1);
    }

    #[test]
    fn test_team_search_and_sort() {
        let team = |id: u32, name: &str, description: &str| Team {
            id,
            name: name.to_string(),
            description: description.to_string(),
            parent_team_id: None,
            team_head_id: None,
            team_head_name: None,
            members: Vec::new(),
            member_count: None,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let teams = vec![team(1, "Platform", "infra"), team(2, "design", "UI work"), team(3, "Billing", "")];

        let sort = SortSpec::new(TeamSortField::Name, SortDirection::Desc);
        let order: Vec<u32> = filter_and_sort_teams(teams.clone(), "", &sort).iter().map(|t| t.id).collect();
        assert_eq!(order, vec![1, 2, 3]);

        let hits = filter_and_sort_teams(teams, "ui", &sort);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_team_collapse_survives_search() {
        use crate::tree::{expand_all, traverse};

        let team = |id: u32, name: &str, parent: Option<u32>| Team {
            id,
            name: name.to_string(),
            description: String::new(),
            parent_team_id: parent,
            team_head_id: None,
            team_head_name: None,
            members: Vec::new(),
            member_count: None,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let teams = vec![
            team(1, "Engineering", None),
            team(2, "Platform", Some(1)),
            team(3, "Payments", Some(2)),
            team(4, "Product", Some(1)),
        ];
        let sort = SortSpec::new(TeamSortField::Name, SortDirection::Asc);

        let mut expanded = expand_all(&build_forest(teams.clone()));
        expanded.toggle_in_place(2);

        // Searching narrows the list; the expand set is kept as is
        let narrowed = build_forest(filter_and_sort_teams(teams, "p", &sort));
        let visible: Vec<u32> = traverse(&narrowed, &expanded).iter().map(|r| r.node.id()).collect();
        assert_eq!(visible, vec![2, 4]);
        assert!(traverse(&narrowed, &expanded).iter().any(|r| r.node.id() == 2 && !r.is_expanded));
    }
}
