//! Task Tree View Component
//!
//! Builds the task hierarchy from a flat list and renders the visible rows.
//! Expand state is owned by the caller so it can outlive filter changes.

use leptos::prelude::*;

use crate::components::TaskTreeRow;
use crate::models::Task;
use crate::permissions::can_delete_task;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::tree::{build_forest, traverse, ExpandedSet};

#[component]
pub fn TaskTreeView(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    expanded: RwSignal<ExpandedSet>,
    on_select: Callback<Task>,
    on_delete: Option<Callback<Task>>,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    let store = use_app_store();

    let forest = Memo::new(move |_| build_forest(tasks.get()));

    let rows = move || {
        let expanded = expanded.get();
        forest.with(|f| {
            traverse(f, &expanded)
                .into_iter()
                .map(|row| (row.node.item.clone(), row.depth, row.has_children, row.is_expanded))
                .collect::<Vec<_>>()
        })
    };

    let on_toggle = Callback::new(move |id: u32| {
        expanded.update(|set| {
            set.toggle_in_place(id);
        });
    });

    view! {
        <div class="tree-view">
            <Show
                when=move || forest.with(|f| !f.is_empty())
                fallback=move || view! { <p class="empty-state">{empty_message.clone()}</p> }
            >
                <For
                    each=rows
                    key=|(task, depth, has_children, is_expanded)| {
                        (task.id, *depth, *has_children, *is_expanded, task.status, task.updated_at.clone())
                    }
                    children=move |(task, depth, has_children, is_expanded)| {
                        let deletable = store.current_user().with_untracked(|viewer| {
                            viewer.as_ref().is_some_and(|v| can_delete_task(v, task.assigner_id()))
                        });
                        view! {
                            <TaskTreeRow
                                task=task
                                depth=depth
                                has_children=has_children
                                is_expanded=is_expanded
                                on_toggle=on_toggle
                                on_select=on_select
                                on_delete=on_delete.filter(|_| deletable)
                            />
                        }
                    }
                />
            </Show>
        </div>
    }
}
