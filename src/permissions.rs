//! Role-Based Access
//!
//! Which pages a role sees and what it may do there.

use crate::models::{Role, User};

/// Sidebar destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Dashboard,
    MyTasks,
    CreatedTasks,
    TeamView,
    Teams,
    Users,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::MyTasks => "My Tasks",
            NavItem::CreatedTasks => "Created Tasks",
            NavItem::TeamView => "Team View",
            NavItem::Teams => "Teams",
            NavItem::Users => "Users",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "⌂",
            NavItem::MyTasks => "☑",
            NavItem::CreatedTasks => "+",
            NavItem::TeamView => "👥",
            NavItem::Teams => "▦",
            NavItem::Users => "👤",
        }
    }
}

/// Sidebar entries for a role, in display order
pub fn nav_items(role: Role) -> Vec<NavItem> {
    let mut items = vec![NavItem::Dashboard, NavItem::MyTasks, NavItem::CreatedTasks, NavItem::TeamView];
    match role {
        Role::Admin => items.extend([NavItem::Teams, NavItem::Users]),
        Role::Manager | Role::Employee => items.push(NavItem::Users),
        Role::Intern => {}
    }
    items
}

pub fn can_access(role: Role, page: NavItem) -> bool {
    nav_items(role).contains(&page)
}

pub fn can_manage_users(viewer: &User) -> bool {
    viewer.role == Role::Admin
}

pub fn can_manage_teams(viewer: &User) -> bool {
    viewer.role == Role::Admin
}

pub fn can_view_users(viewer: &User) -> bool {
    matches!(viewer.role, Role::Admin | Role::Manager | Role::Employee)
}

/// Admins edit anyone, managers edit members of their own team
pub fn can_edit_user(viewer: &User, target: &User) -> bool {
    match viewer.role {
        Role::Admin => true,
        Role::Manager => viewer.team_id.is_some() && viewer.team_id == target.team_id,
        _ => false,
    }
}

/// Admins may delete tasks anywhere, everyone else only tasks they created
pub fn can_delete_task(viewer: &User, assigner_id: Option<u32>) -> bool {
    viewer.role == Role::Admin || assigner_id == Some(viewer.id)
}

/// Which tasks the dashboard lists for a viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    All,
    Assignee(u32),
    Team(u32),
    /// Manager without a team
    Nothing,
}

impl TaskScope {
    /// Query parameters narrowing the task listing
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            TaskScope::All | TaskScope::Nothing => Vec::new(),
            TaskScope::Assignee(id) => vec![("assignee_id", id.to_string())],
            TaskScope::Team(id) => vec![("team_id", id.to_string())],
        }
    }
}

pub fn task_scope(viewer: &User) -> TaskScope {
    match viewer.role {
        Role::Admin => TaskScope::All,
        Role::Manager => viewer.team_id.map(TaskScope::Team).unwrap_or(TaskScope::Nothing),
        Role::Employee | Role::Intern => TaskScope::Assignee(viewer.id),
    }
}

/// Which users the Users page lists for a viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserScope {
    All,
    Team(u32),
    /// Restricted viewer without a team: show nothing, skip the request
    Nothing,
}

pub fn user_scope(viewer: &User) -> UserScope {
    match viewer.role {
        Role::Admin => UserScope::All,
        Role::Manager | Role::Employee => viewer.team_id.map(UserScope::Team).unwrap_or(UserScope::Nothing),
        Role::Intern => UserScope::Nothing,
    }
}
