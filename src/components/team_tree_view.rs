//! Team Tree View Component
//!
//! Team hierarchy built from `parent_team_id`, fully expanded on load.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Team;
use crate::tree::{build_forest, expand_all, traverse, ExpandedSet};

/// A single team row
#[component]
fn TeamTreeNode(
    team: Team,
    depth: usize,
    has_children: bool,
    is_expanded: bool,
    on_toggle: Callback<u32>,
    on_delete: Option<Callback<Team>>,
) -> impl IntoView {
    let id = team.id;
    let indent = depth * 16;
    let head = team.team_head_name.clone();
    let members = team.member_label();
    let delete_target = team.clone();

    view! {
        <div class="team-row" style=format!("padding-left: {}px;", indent)>
            {if has_children {
                view! {
                    <button class="collapse-btn" on:click=move |_| on_toggle.run(id)>
                        {if is_expanded { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}
            <div class="team-row-body">
                <span class="team-name">{team.name.clone()}</span>
                {(!team.description.is_empty()).then(|| view! {
                    <span class="team-description">{team.description.clone()}</span>
                })}
                <span class="team-meta">
                    {head.map(|name| format!("Head: {} · ", name))}
                    {members}
                </span>
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

#[component]
pub fn TeamTreeView(
    /// Teams to show, after search
    #[prop(into)]
    teams: Signal<Vec<Team>>,
    /// Unfiltered team list; a reload of it re-expands everything
    #[prop(into)]
    all_teams: Signal<Vec<Team>>,
    on_delete: Option<Callback<Team>>,
) -> impl IntoView {
    let forest = Memo::new(move |_| build_forest(teams.get()));
    let expanded = RwSignal::new(ExpandedSet::new());

    // Parents of the full hierarchy cover every filtered view
    Effect::new(move |_| {
        let all = expand_all(&build_forest(all_teams.get()));
        expanded.set(all);
    });

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
        <div class="team-tree">
            <Show
                when=move || forest.with(|f| !f.is_empty())
                fallback=|| view! { <p class="empty-state">"No teams found"</p> }
            >
                <For
                    each=rows
                    key=|(team, depth, has_children, is_expanded)| {
                        (team.id, *depth, *has_children, *is_expanded, team.updated_at.clone())
                    }
                    children=move |(team, depth, has_children, is_expanded)| view! {
                        <TeamTreeNode
                            team=team
                            depth=depth
                            has_children=has_children
                            is_expanded=is_expanded
                            on_toggle=on_toggle
                            on_delete=on_delete
                        />
                    }
                />
            </Show>
        </div>
    }
}
