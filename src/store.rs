//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::error::ApiError;
use crate::models::{Notification, Team, User};
use crate::notifications::NotificationState;

/// Session-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, None shows the login form
    pub current_user: Option<User>,
    /// All teams, used by filter dropdowns and the team hierarchy
    pub teams: Vec<Team>,
    /// Notification drawer contents
    pub notifications: NotificationState,
    /// Unread badge count as last reported by the server
    pub unread_count: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a team from the store by ID
pub fn store_remove_team(store: &AppStore, team_id: u32) {
    store.teams().write().retain(|team| team.id != team_id);
}

/// Replace the drawer contents and resync the badge
pub fn store_set_notifications(store: &AppStore, items: Vec<Notification>) {
    let state = NotificationState::new(items);
    store.unread_count().set(state.unread_count() as u32);
    store.notifications().set(state);
}

/// Mark one notification read locally
pub fn store_mark_read(store: &AppStore, id: u32) {
    let changed = store.notifications().write().mark_read(id);
    if changed {
        store.unread_count().update(|n| *n = n.saturating_sub(1));
    }
}

/// Mark all notifications read locally
pub fn store_mark_all_read(store: &AppStore) {
    store.notifications().write().mark_all_read();
    store.unread_count().set(0);
}

/// Forget everything tied to the session
pub fn store_sign_out(store: &AppStore) {
    store.current_user().set(None);
    store.teams().write().clear();
    store.notifications().set(NotificationState::default());
    store.unread_count().set(0);
}

/// Log a failed API call; an expired session also signs the user out
pub fn report_error(store: &AppStore, action: &str, err: &ApiError) {
    log::error!("[APP] {} failed: {}", action, err);
    if err.is_unauthorized() {
        commands::clear_tokens();
        store_sign_out(store);
    }
}
