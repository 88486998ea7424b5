//! Sidebar Component
//!
//! Role-dependent navigation, collapsible to icons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::permissions::nav_items;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (collapsed, set_collapsed) = signal(false);

    let items = move || {
        store
            .current_user()
            .with(|user| user.as_ref().map(|u| nav_items(u.role)).unwrap_or_default())
    };

    view! {
        <nav class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-header">
                <Show when=move || !collapsed.get()>
                    <span class="sidebar-title">"Tarefa"</span>
                </Show>
                <button class="sidebar-toggle" on:click=move |_| set_collapsed.update(|c| *c = !*c)>
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
            <ul class="sidebar-nav">
                <For
                    each=items
                    key=|item| *item
                    children=move |item| {
                        let is_active = move || ctx.current_page.get() == item;
                        view! {
                            <li
                                class=move || if is_active() { "nav-item active" } else { "nav-item" }
                                title=item.label()
                                on:click=move |_| ctx.navigate(item)
                            >
                                <span class="nav-icon">{item.icon()}</span>
                                <Show when=move || !collapsed.get()>
                                    <span class="nav-label">{item.label()}</span>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
        </nav>
    }
}
