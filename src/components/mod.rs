//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_sort;
mod login_form;
mod notification_drawer;
mod sidebar;
mod stat_cards;
mod task_board;
mod task_card;
mod task_detail;
mod task_tree_row;
mod task_tree_view;
mod team_tree_view;
mod top_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_sort::FilterSortBar;
pub use login_form::LoginForm;
pub use notification_drawer::NotificationDrawer;
pub use sidebar::Sidebar;
pub use stat_cards::StatCards;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use task_detail::TaskDetailPanel;
pub use task_tree_row::TaskTreeRow;
pub use task_tree_view::TaskTreeView;
pub use team_tree_view::TeamTreeView;
pub use top_bar::TopBar;
