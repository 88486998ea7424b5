//! Task Board Component
//!
//! Shared body of the task pages: filter bar, task tree and detail panel.
//! Filtering runs on the loaded list before the tree is built.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{FilterSortBar, TaskDetailPanel, TaskTreeView};
use crate::context::use_app_context;
use crate::filter::{filter_and_sort_tasks, task_assignees, SortSpec, TaskFilter, TaskSortField};
use crate::models::Task;
use crate::store::{report_error, use_app_store, AppStateStoreFields};
use crate::tree::ExpandedSet;

#[component]
pub fn TaskBoard(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    default_sort: SortSpec<TaskSortField>,
    allow_delete: bool,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let filter = RwSignal::new(TaskFilter::default());
    let sort = RwSignal::new(default_sort);
    let expanded = RwSignal::new(ExpandedSet::new());
    let (selected, set_selected) = signal::<Option<Task>>(None);

    // A reloaded list starts collapsed
    Effect::new(move |_| {
        tasks.track();
        expanded.set(ExpandedSet::new());
    });

    let visible = Memo::new(move |_| filter_and_sort_tasks(tasks.get(), &filter.get(), &sort.get()));
    let teams = Signal::derive(move || store.teams().get());
    let assignees = Memo::new(move |_| tasks.with(|t| task_assignees(t)));

    let on_select = Callback::new(move |task: Task| set_selected.set(Some(task)));
    let on_close = Callback::new(move |_: ()| set_selected.set(None));
    let on_delete = allow_delete.then(|| {
        Callback::new(move |task: Task| {
            spawn_local(async move {
                match commands::delete_task(task.id).await {
                    Ok(()) => {
                        log::info!("[APP] deleted task {}", task.id);
                        if selected.with_untracked(|s| s.as_ref().is_some_and(|t| t.id == task.id)) {
                            set_selected.set(None);
                        }
                        ctx.reload();
                    }
                    Err(e) => report_error(&store, "delete task", &e),
                }
            });
        })
    });

    view! {
        <div class="task-board">
            <div class="task-board-main">
                <FilterSortBar filter=filter sort=sort teams=teams assignees=assignees />
                <p class="task-count">
                    {move || format!("Showing {} of {} tasks", visible.with(|v| v.len()), tasks.with(|t| t.len()))}
                </p>
                <TaskTreeView
                    tasks=visible
                    expanded=expanded
                    on_select=on_select
                    on_delete=on_delete
                    empty_message=empty_message
                />
            </div>
            <TaskDetailPanel task=selected on_close=on_close />
        </div>
    }
}
