//! Notification Drawer Component
//!
//! Slide-over list of notifications with mark-read actions.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::notifications::relative_time;
use crate::store::{
    report_error, store_mark_all_read, store_mark_read, store_set_notifications, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn NotificationDrawer(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let (loading, set_loading) = signal(false);

    // Refresh whenever the drawer opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match commands::list_notifications().await {
                Ok(items) => {
                    log::info!("[APP] loaded {} notifications", items.len());
                    store_set_notifications(&store, items);
                }
                Err(e) => report_error(&store, "load notifications", &e),
            }
            set_loading.set(false);
        });
    });

    let mark_read = move |id: u32| {
        spawn_local(async move {
            match commands::mark_notification_read(id).await {
                Ok(()) => store_mark_read(&store, id),
                Err(e) => report_error(&store, "mark notification read", &e),
            }
        });
    };

    let mark_all = move |_| {
        spawn_local(async move {
            match commands::mark_all_notifications_read().await {
                Ok(()) => store_mark_all_read(&store),
                Err(e) => report_error(&store, "mark all notifications read", &e),
            }
        });
    };

    let items = move || store.notifications().with(|s| s.items.clone());

    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| open.set(false)></div>
            <aside class="notification-drawer">
                <header class="drawer-header">
                    <h2>"Notifications"</h2>
                    <button
                        class="mark-all-btn"
                        disabled=move || store.unread_count().get() == 0
                        on:click=mark_all
                    >
                        "Mark all read"
                    </button>
                    <button class="close-btn" on:click=move |_| open.set(false)>"✕"</button>
                </header>
                {move || {
                    if loading.get() {
                        view! { <div class="spinner"></div> }.into_any()
                    } else if items().is_empty() {
                        view! { <p class="empty-state">"No notifications"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="notification-list">
                                <For
                                    each=items
                                    key=|n| (n.id, n.is_read)
                                    children=move |n| {
                                        let id = n.id;
                                        let unread = !n.is_read;
                                        let when = relative_time(&n.created_at, Utc::now());
                                        let row_class = if unread { "notification unread" } else { "notification" };
                                        view! {
                                            <li
                                                class=row_class
                                                on:click=move |_| if unread { mark_read(id) }
                                            >
                                                <span class="notification-title">{n.title}</span>
                                                <span class="notification-message">{n.message}</span>
                                                {n.related_task.map(|t| view! {
                                                    <span class="notification-task">{t.title}</span>
                                                })}
                                                <span class="notification-time">{when}</span>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }.into_any()
                    }
                }}
            </aside>
        </Show>
    }
}
