//! Filter & Sort Bar Component
//!
//! Search box, filter dropdowns and the sort selector above a task list.

use leptos::prelude::*;

use crate::filter::{SortSpec, TaskFilter, TaskSortField, TASK_SORT_OPTIONS};
use crate::models::{Priority, Status, Team, UserSummary};

#[component]
pub fn FilterSortBar(
    filter: RwSignal<TaskFilter>,
    sort: RwSignal<SortSpec<TaskSortField>>,
    #[prop(into)] teams: Signal<Vec<Team>>,
    #[prop(into)] assignees: Signal<Vec<UserSummary>>,
) -> impl IntoView {
    view! {
        <div class="filter-sort">
            <input
                type="text"
                class="search-input"
                placeholder="Search tasks..."
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.search = value);
                }
            />

            <div class="filter-row">
                <select
                    prop:value=move || filter.with(|f| f.team_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let team_id = event_target_value(&ev).parse().ok();
                        filter.update(|f| f.team_id = team_id);
                    }
                >
                    <option value="">"All Teams"</option>
                    <For
                        each=move || teams.get()
                        key=|team| team.id
                        children=|team| view! { <option value=team.id.to_string()>{team.name}</option> }
                    />
                </select>

                <select
                    prop:value=move || filter.with(|f| f.status.map(|s| s.as_str()).unwrap_or_default())
                    on:change=move |ev| {
                        let status = Status::from_str(&event_target_value(&ev));
                        filter.update(|f| f.status = status);
                    }
                >
                    <option value="">"All Status"</option>
                    {Status::ALL.iter().map(|s| view! { <option value=s.as_str()>{s.label()}</option> }).collect_view()}
                </select>

                <select
                    prop:value=move || filter.with(|f| f.priority.map(|p| p.as_str()).unwrap_or_default())
                    on:change=move |ev| {
                        let priority = Priority::from_str(&event_target_value(&ev));
                        filter.update(|f| f.priority = priority);
                    }
                >
                    <option value="">"All Priorities"</option>
                    {Priority::ALL.iter().map(|p| view! { <option value=p.as_str()>{p.label()}</option> }).collect_view()}
                </select>

                <select
                    prop:value=move || filter.with(|f| f.assignee_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let assignee_id = event_target_value(&ev).parse().ok();
                        filter.update(|f| f.assignee_id = assignee_id);
                    }
                >
                    <option value="">"All Assignees"</option>
                    <For
                        each=move || assignees.get()
                        key=|user| user.id
                        children=|user| view! { <option value=user.id.to_string()>{user.name}</option> }
                    />
                </select>

                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.overdue_only)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            filter.update(|f| f.overdue_only = checked);
                        }
                    />
                    "Overdue only"
                </label>

                <select
                    class="sort-select"
                    prop:value=move || sort.get().to_key()
                    on:change=move |ev| {
                        if let Some(spec) = SortSpec::<TaskSortField>::parse(&event_target_value(&ev)) {
                            sort.set(spec);
                        }
                    }
                >
                    {TASK_SORT_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>

                <Show when=move || filter.with(|f| f.is_active())>
                    <button class="clear-filters-btn" on:click=move |_| filter.update(|f| f.clear_fields())>
                        "Clear All"
                    </button>
                </Show>
            </div>
        </div>
    }
}
