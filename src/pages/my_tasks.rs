//! My Tasks Page
//!
//! Tasks assigned to the signed-in user.

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
pub fn MyTasksPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match commands::list_my_tasks().await {
                Ok(loaded) => set_tasks.set(loaded),
                Err(e) => report_error(&store, "load my tasks", &e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="page my-tasks">
            <h1>"My Tasks"</h1>
            <Show when=move || !(loading.get() && tasks.with(|t| t.is_empty())) fallback=|| view! { <div class="spinner"></div> }>
                <TaskBoard
                    tasks=tasks
                    default_sort=default_task_sort(NavItem::MyTasks)
                    allow_delete=false
                    empty_message="No tasks assigned to you"
                />
            </Show>
        </section>
    }
}
