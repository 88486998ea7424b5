//! Created Tasks Page
//!
//! Tasks the signed-in user assigned to others. Their creator may delete them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TaskBoard;
use crate::context::use_app_context;
use crate::filter::default_task_sort;
use crate::models::Task;
use crate::permissions::NavItem;
use crate::store::{report_error, use_app_store};

#[component]
pub fn CreatedTasksPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match commands::list_created_tasks().await {
                Ok(loaded) => set_tasks.set(loaded),
                Err(e) => report_error(&store, "load created tasks", &e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="page created-tasks">
            <h1>"Created Tasks"</h1>
            <Show when=move || !(loading.get() && tasks.with(|t| t.is_empty())) fallback=|| view! { <div class="spinner"></div> }>
                <TaskBoard
                    tasks=tasks
                    default_sort=default_task_sort(NavItem::CreatedTasks)
                    allow_delete=true
                    empty_message="You have not created any tasks yet"
                />
            </Show>
        </section>
    }
}
