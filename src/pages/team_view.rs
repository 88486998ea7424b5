//! Team View Page
//!
//! Members of the viewer's team, searchable and sortable.
//! Picking a member shows that member's tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TaskBoard;
use crate::context::use_app_context;
use crate::filter::{default_task_sort, filter_and_sort_users, SortDirection, SortField, SortSpec, UserFilter, UserSortField};
use crate::models::{Task, Team, User};
use crate::permissions::NavItem;
use crate::store::{report_error, use_app_store, AppStateStoreFields};

#[component]
pub fn TeamViewPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (team, set_team) = signal::<Option<Team>>(None);
    let (loading, set_loading) = signal(true);
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortSpec::new(UserSortField::Name, SortDirection::Asc));
    let (selected_member, set_selected_member) = signal::<Option<User>>(None);
    let (member_tasks, set_member_tasks) = signal(Vec::<Task>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let team_id = store.current_user().with(|u| u.as_ref().and_then(|u| u.team_id));
        let Some(team_id) = team_id else {
            set_team.set(None);
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match commands::get_team(team_id).await {
                Ok(loaded) => {
                    log::info!("[APP] team {} has {} members", loaded.id, loaded.members.len());
                    set_team.set(Some(loaded));
                }
                Err(e) => report_error(&store, "load team", &e),
            }
            set_loading.set(false);
        });
    });

    // Tasks of the picked member
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(member_id) = selected_member.with(|m| m.as_ref().map(|m| m.id)) else {
            set_member_tasks.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match commands::list_tasks_for_assignee(member_id).await {
                Ok(loaded) => set_member_tasks.set(loaded),
                Err(e) => report_error(&store, "load member tasks", &e),
            }
        });
    });

    let members = Memo::new(move |_| {
        let list = team.with(|t| t.as_ref().map(|t| t.members.clone()).unwrap_or_default());
        let filter = UserFilter { search: search.get(), ..Default::default() };
        filter_and_sort_users(list, &filter, &sort.get())
    });

    view! {
        <section class="page team-view">
            <h1>{move || team.with(|t| t.as_ref().map(|t| t.name.clone()).unwrap_or_else(|| "Team View".to_string()))}</h1>
            {move || {
                if loading.get() {
                    view! { <div class="spinner"></div> }.into_any()
                } else if team.with(|t| t.is_none()) {
                    view! { <p class="empty-state">"You are not a member of any team"</p> }.into_any()
                } else {
                    view! {
                        <div class="member-controls">
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search members..."
                                prop:value=move || search.get()
                                on:input=move |ev| search.set(event_target_value(&ev))
                            />
                            <select
                                prop:value=move || sort.with(|s| s.field.as_str())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    if let Some(field) = UserSortField::ALL.iter().copied().find(|f| f.as_str() == value) {
                                        sort.update(|s| s.field = field);
                                    }
                                }
                            >
                                <option value="name">"Name"</option>
                                <option value="role">"Role"</option>
                                <option value="position">"Position"</option>
                            </select>
                            <button
                                class="sort-direction-btn"
                                on:click=move |_| sort.update(|s| s.direction = s.direction.flipped())
                            >
                                {move || if sort.with(|s| s.direction == SortDirection::Asc) { "A-Z" } else { "Z-A" }}
                            </button>
                        </div>
                        <ul class="member-list">
                            <For
                                each=move || members.get()
                                key=|m| m.id
                                children=move |member| {
                                    let id = member.id;
                                    let is_selected = move || selected_member.with(|m| m.as_ref().is_some_and(|m| m.id == id));
                                    let picked = member.clone();
                                    view! {
                                        <li
                                            class=move || if is_selected() { "member selected" } else { "member" }
                                            on:click=move |_| set_selected_member.set(Some(picked.clone()))
                                        >
                                            <span class="member-name">{member.name.clone()}</span>
                                            <span class=format!("badge role-{}", member.role.as_str())>{member.role.label()}</span>
                                            <span class="member-position">{member.position.clone()}</span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }.into_any()
                }
            }}
            {move || selected_member.get().map(|member| view! {
                <div class="member-tasks">
                    <h2>{format!("Tasks of {}", member.name)}</h2>
                    <TaskBoard
                        tasks=member_tasks
                        default_sort=default_task_sort(NavItem::TeamView)
                        allow_delete=false
                        empty_message="No tasks assigned"
                    />
                </div>
            })}
        </section>
    }
}
