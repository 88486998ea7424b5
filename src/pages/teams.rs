//! Teams Page
//!
//! Admin view of the team hierarchy with search and sort.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::TeamTreeView;
use crate::filter::{filter_and_sort_teams, SortDirection, SortSpec, TeamSortField, TEAM_SORT_OPTIONS};
use crate::models::Team;
use crate::permissions::can_manage_teams;
use crate::store::{report_error, store_remove_team, use_app_store, AppStateStoreFields};

#[component]
pub fn TeamsPage() -> impl IntoView {
    let store = use_app_store();

    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortSpec::new(TeamSortField::Name, SortDirection::Asc));

    let can_manage = move || store.current_user().with(|u| u.as_ref().is_some_and(can_manage_teams));
    let all_teams = Signal::derive(move || store.teams().get());
    let visible = Memo::new(move |_| filter_and_sort_teams(all_teams.get(), &search.get(), &sort.get()));

    let on_delete = Callback::new(move |team: Team| {
        spawn_local(async move {
            match commands::delete_team(team.id).await {
                Ok(()) => {
                    log::info!("[APP] deleted team {}", team.name);
                    store_remove_team(&store, team.id);
                }
                Err(e) => report_error(&store, "delete team", &e),
            }
        });
    });

    view! {
        <section class="page teams">
            <h1>"Teams"</h1>
            <div class="team-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search teams..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="sort-select"
                    prop:value=move || sort.get().to_key()
                    on:change=move |ev| {
                        if let Some(spec) = SortSpec::<TeamSortField>::parse(&event_target_value(&ev)) {
                            sort.set(spec);
                        }
                    }
                >
                    {TEAM_SORT_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || view! {
                <TeamTreeView teams=visible all_teams=all_teams on_delete=can_manage().then_some(on_delete) />
            }}
        </section>
    }
}
