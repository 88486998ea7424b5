//! Stat Cards Component

use leptos::prelude::*;

use crate::models::{Priority, Status};
use crate::stats::TaskStats;

#[component]
fn StatCard(label: &'static str, class: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class)>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn StatCards(#[prop(into)] stats: Signal<TaskStats>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            <StatCard label="Total Tasks" class="total" value=Signal::derive(move || stats.with(|s| s.total.to_string())) />
            <StatCard
                label="Completed"
                class="completed"
                value=Signal::derive(move || stats.with(|s| format!("{} ({}%)", s.completed, s.completion_rate())))
            />
            <StatCard label="In Progress" class="in-progress" value=Signal::derive(move || stats.with(|s| s.in_progress.to_string())) />
            <StatCard label="Overdue" class="overdue" value=Signal::derive(move || stats.with(|s| s.overdue.to_string())) />
        </div>
        <div class="priority-breakdown">
            {Priority::ALL
                .iter()
                .rev()
                .map(|p| {
                    let p = *p;
                    view! {
                        <span class=format!("badge priority-{}", p.as_str())>
                            {p.label()} ": "
                            {move || stats.with(|s| s.by_priority.get(&p).copied().unwrap_or(0))}
                        </span>
                    }
                })
                .collect_view()}
        </div>
        <div class="status-breakdown">
            {Status::ALL
                .iter()
                .map(|st| {
                    let st = *st;
                    view! {
                        <span class=format!("badge status-{}", st.as_str())>
                            {st.label()} ": "
                            {move || stats.with(|s| s.by_status.get(st.as_str()).copied().unwrap_or(0))}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
