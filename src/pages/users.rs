//! Users Page
//!
//! Directory of users visible to the viewer's role. Admins can also
//! browse deleted accounts, delete and restore.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, QueryParams};
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::filter::{filter_and_sort_users, SortDirection, SortField, SortSpec, UserFilter, UserSortField};
use crate::models::{Role, User};
use crate::permissions::{can_edit_user, can_manage_users, can_view_users, user_scope, UserScope};
use crate::store::{report_error, use_app_store, AppStateStoreFields};

#[component]
pub fn UsersPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let show_deleted = RwSignal::new(false);
    let filter = RwSignal::new(UserFilter::default());
    let sort = RwSignal::new(SortSpec::new(UserSortField::Name, SortDirection::Asc));

    let viewer = move || store.current_user().get_untracked();
    let is_admin = move || store.current_user().with(|u| u.as_ref().is_some_and(can_manage_users));

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let deleted = show_deleted.get();
        let Some(scope) = store.current_user().with(|u| {
            u.as_ref().map(|u| if can_view_users(u) { user_scope(u) } else { UserScope::Nothing })
        }) else {
            return;
        };

        let params: QueryParams = match scope {
            UserScope::All => Vec::new(),
            UserScope::Team(team_id) => vec![("team_id", team_id.to_string())],
            UserScope::Nothing => {
                set_users.set(Vec::new());
                set_loading.set(false);
                return;
            }
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = if deleted && scope == UserScope::All {
                commands::list_deleted_users().await
            } else {
                commands::list_users(&params).await
            };
            match result {
                Ok(loaded) => {
                    log::info!("[APP] loaded {} users", loaded.len());
                    set_users.set(loaded);
                }
                Err(e) => report_error(&store, "load users", &e),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| filter_and_sort_users(users.get(), &filter.get(), &sort.get()));

    let delete = move |id: u32| {
        spawn_local(async move {
            match commands::delete_user(id).await {
                Ok(()) => ctx.reload(),
                Err(e) => report_error(&store, "delete user", &e),
            }
        });
    };

    let restore = move |id: u32| {
        spawn_local(async move {
            match commands::restore_user(id).await {
                Ok(()) => ctx.reload(),
                Err(e) => report_error(&store, "restore user", &e),
            }
        });
    };

    view! {
        <section class="page users">
            <h1>"Users"</h1>
            <div class="user-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search users..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.search = value);
                    }
                />
                <select
                    prop:value=move || filter.with(|f| f.role.map(|r| r.as_str()).unwrap_or_default())
                    on:change=move |ev| {
                        let role = Role::from_str(&event_target_value(&ev));
                        filter.update(|f| f.role = role);
                    }
                >
                    <option value="">"All Roles"</option>
                    {Role::ALL.iter().map(|r| view! { <option value=r.as_str()>{r.label()}</option> }).collect_view()}
                </select>
                <Show when=is_admin>
                    <select
                        prop:value=move || filter.with(|f| f.team_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let team_id = event_target_value(&ev).parse().ok();
                            filter.update(|f| f.team_id = team_id);
                        }
                    >
                        <option value="">"All Teams"</option>
                        <For
                            each=move || store.teams().get()
                            key=|team| team.id
                            children=|team| view! { <option value=team.id.to_string()>{team.name}</option> }
                        />
                    </select>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || show_deleted.get()
                            on:change=move |ev| show_deleted.set(event_target_checked(&ev))
                        />
                        "Show deleted"
                    </label>
                </Show>
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

            {move || {
                if loading.get() && users.with(|u| u.is_empty()) {
                    return view! { <div class="spinner"></div> }.into_any();
                }
                if visible.with(|v| v.is_empty()) {
                    return view! { <p class="empty-state">"No users found"</p> }.into_any();
                }
                view! {
                    <table class="user-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Position"</th>
                                <th>"Team"</th>
                                <th>"Phone"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || visible.get()
                                key=|u| (u.id, u.updated_at.clone())
                                children=move |user| {
                                    let id = user.id;
                                    let viewer = viewer();
                                    let editable = viewer.as_ref().is_some_and(|v| can_edit_user(v, &user));
                                    let is_self = viewer.as_ref().is_some_and(|v| v.id == id);
                                    let deleted = show_deleted.get_untracked();
                                    let admin = is_admin();
                                    let row_class = if user.is_active { "user-row" } else { "user-row inactive" };
                                    view! {
                                        <tr class=row_class>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td><span class=format!("badge role-{}", user.role.as_str())>{user.role.label()}</span></td>
                                            <td>{user.position.clone()}</td>
                                            <td>{user.team_name.clone().unwrap_or_default()}</td>
                                            <td>{editable.then(|| user.mobile_number.clone())}</td>
                                            <td class="row-actions">
                                                {(admin && deleted).then(|| view! {
                                                    <button class="restore-btn" on:click=move |_| restore(id)>"Restore"</button>
                                                })}
                                                {(admin && !deleted && !is_self).then(|| view! {
                                                    <DeleteConfirmButton
                                                        button_class="delete-btn"
                                                        on_confirm=Callback::new(move |_: ()| delete(id))
                                                    />
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }.into_any()
            }}
        </section>
    }
}
