//! Pages
//!
//! One component per sidebar destination.

mod created_tasks;
mod dashboard;
mod my_tasks;
mod team_view;
mod teams;
mod users;

pub use created_tasks::CreatedTasksPage;
pub use dashboard::DashboardPage;
pub use my_tasks::MyTasksPage;
pub use team_view::TeamViewPage;
pub use teams::TeamsPage;
pub use users::UsersPage;
