//! Task Card Component
//!
//! Compact summary of one task: title, badges, assignee and due date.

use chrono::{DateTime, NaiveDate, Utc};
use leptos::prelude::*;

use crate::models::Task;

/// `May 03, 2024` style label for a due date, raw text if unparseable
pub fn format_date(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%b %d, %Y").to_string();
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let overdue = task.is_overdue || task.is_past_due(Utc::now());
    let card_class = if overdue { "task-card overdue" } else { "task-card" };
    let due_class = if overdue { "task-due overdue" } else { "task-due" };
    let priority_class = format!("badge priority-{}", task.priority.as_str());
    let status_class = format!("badge status-{}", task.status.as_str());
    let assignee = task.assignee.as_ref().map(|u| u.name.clone());
    let team = task.team.as_ref().map(|t| t.name.clone());
    let due = task.due_date.as_deref().map(format_date);
    let sub_title = (!task.sub_title.is_empty()).then(|| task.sub_title.clone());

    view! {
        <div class=card_class>
            <div class="task-card-header">
                <span class="task-title">{task.title.clone()}</span>
                <span class=priority_class>{task.priority.label()}</span>
                <span class=status_class>{task.status.label()}</span>
            </div>
            {sub_title.map(|s| view! { <p class="task-subtitle">{s}</p> })}
            <div class="task-card-meta">
                {assignee.map(|name| view! { <span class="task-assignee">"👤 " {name}</span> })}
                {team.map(|name| view! { <span class="task-team">"▦ " {name}</span> })}
                {due.map(|d| view! {
                    <span class=due_class>"📅 " {d}</span>
                })}
                {(task.completion_percentage > 0.0).then(|| view! {
                    <span class="task-progress">{format!("{:.0}%", task.completion_percentage)}</span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-03"), "May 03, 2024");
        assert_eq!(format_date("2024-05-03T10:00:00Z"), "May 03, 2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
