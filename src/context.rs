//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::permissions::NavItem;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload data from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from the API - write
    set_reload_trigger: WriteSignal<u32>,
    /// Page shown in the main area - read
    pub current_page: ReadSignal<NavItem>,
    /// Page shown in the main area - write
    set_current_page: WriteSignal<NavItem>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_page: (ReadSignal<NavItem>, WriteSignal<NavItem>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    /// Trigger a reload of page data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Switch the main area to another page
    pub fn navigate(&self, page: NavItem) {
        log::debug!("[APP] navigate to {}", page.label());
        self.set_current_page.set(page);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
