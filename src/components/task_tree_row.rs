//! Task Tree Row Component
//!
//! One visible row of the task hierarchy.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, TaskCard};
use crate::models::Task;

/// A single task row in the tree
#[component]
pub fn TaskTreeRow(
    task: Task,
    depth: usize,
    has_children: bool,
    is_expanded: bool,
    on_toggle: Callback<u32>,
    on_select: Callback<Task>,
    on_delete: Option<Callback<Task>>,
) -> impl IntoView {
    let id = task.id;
    let indent = depth * 24;
    let selected = task.clone();
    let delete_target = task.clone();
    let toggle_title = if is_expanded { "Collapse" } else { "Expand" };

    view! {
        <div class="tree-row" style=format!("padding-left: {}px;", indent)>
            // Collapse toggle
            {if has_children {
                view! {
                    <button
                        class="collapse-btn"
                        title=toggle_title
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_toggle.run(id);
                        }
                    >
                        {if is_expanded { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            <div class="tree-row-body" on:click=move |_| on_select.run(selected.clone())>
                <TaskCard task=task />
            </div>

            {on_delete.map(|cb| view! {
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_: ()| cb.run(delete_target.clone()))
                />
            })}
        </div>
    }
}
