//! Top Bar Component
//!
//! Signed-in user, notification bell with unread badge, and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_sign_out, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar(drawer_open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();

    let user_label = move || {
        store.current_user().with(|user| {
            user.as_ref()
                .map(|u| format!("{} · {}", u.name, u.role.label()))
                .unwrap_or_default()
        })
    };

    let logout = move |_| {
        spawn_local(async move {
            commands::logout().await;
            store_sign_out(&store);
        });
    };

    view! {
        <header class="top-bar">
            <span class="top-bar-user">{user_label}</span>
            <div class="top-bar-actions">
                <button
                    class="bell-btn"
                    title="Notifications"
                    on:click=move |_| drawer_open.update(|open| *open = !*open)
                >
                    "🔔"
                    <Show when=move || (store.unread_count().get() > 0)>
                        <span class="unread-badge">{move || store.unread_count().get()}</span>
                    </Show>
                </button>
                <button class="logout-btn" on:click=logout>"Log out"</button>
            </div>
        </header>
    }
}
