//! Dashboard Page
//!
//! Stat cards and the task board for everything the viewer's role covers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{StatCards, TaskBoard};
use crate::context::use_app_context;
use crate::filter::default_task_sort;
use crate::models::Task;
use crate::permissions::{task_scope, NavItem, TaskScope};
use crate::stats::TaskStats;
use crate::store::{report_error, use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let Some(scope) = store.current_user().with(|u| u.as_ref().map(task_scope)) else {
            return;
        };
        log::debug!("[APP] loading dashboard, trigger={}", trigger);

        if scope == TaskScope::Nothing {
            set_tasks.set(Vec::new());
            set_loading.set(false);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match commands::list_tasks(&scope.query_params()).await {
                Ok(loaded) => {
                    log::info!("[APP] dashboard loaded {} tasks", loaded.len());
                    set_tasks.set(loaded);
                }
                Err(e) => report_error(&store, "load dashboard", &e),
            }
            set_loading.set(false);
        });
    });

    let stats = Memo::new(move |_| tasks.with(|t| TaskStats::from_tasks(t)));

    view! {
        <section class="page dashboard">
            <h1>"Dashboard"</h1>
            <Show when=move || !(loading.get() && tasks.with(|t| t.is_empty())) fallback=|| view! { <div class="spinner"></div> }>
                <StatCards stats=stats />
                <TaskBoard
                    tasks=tasks
                    default_sort=default_task_sort(NavItem::Dashboard)
                    allow_delete=true
                    empty_message="No tasks found"
                />
            </Show>
        </section>
    }
}
