//! Task Detail Panel Component
//!
//! Right-hand panel for the selected task: markdown description,
//! comments with attachments, and the complete action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::task_card::format_date;
use crate::context::use_app_context;
use crate::markdown::{attachment_name, encode_attachment_url, render_markdown};
use crate::models::{Comment, Status, Task};
use crate::store::{report_error, use_app_store};

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let author = comment
        .user_details
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let body = render_markdown(&comment.comment);
    let posted = format_date(&comment.created_at);

    view! {
        <li class="comment">
            <div class="comment-header">
                <span class="comment-author">{author}</span>
                <span class="comment-date">{posted}</span>
                {comment.is_edited.then(|| view! { <span class="comment-edited">"(edited)"</span> })}
            </div>
            <div class="markdown-body" inner_html=body></div>
            <div class="comment-attachments">
                {comment
                    .image_urls
                    .iter()
                    .map(|url| {
                        let src = encode_attachment_url(url);
                        let alt = attachment_name(url).to_string();
                        view! { <img class="attachment-image" src=src alt=alt /> }
                    })
                    .collect_view()}
                {comment
                    .file_urls
                    .iter()
                    .map(|url| {
                        let href = encode_attachment_url(url);
                        let name = attachment_name(url).to_string();
                        view! { <a class="attachment-file" href=href target="_blank" rel="noopener">"📎 " {name}</a> }
                    })
                    .collect_view()}
            </div>
        </li>
    }
}

#[component]
pub fn TaskDetailPanel(task: ReadSignal<Option<Task>>, on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    // Row copy first, replaced by the fresh record once fetched
    let detail = RwSignal::new(None::<Task>);

    // Load the full task and its comments for the selection
    Effect::new(move |_| {
        set_comments.set(Vec::new());
        let selected = task.get();
        let Some(id) = selected.as_ref().map(|t| t.id) else {
            detail.set(None);
            return;
        };
        detail.set(selected);
        spawn_local(async move {
            match commands::get_task(id).await {
                Ok(fresh) => {
                    if detail.with_untracked(|d| d.as_ref().is_some_and(|d| d.id == id)) {
                        detail.set(Some(fresh));
                    }
                }
                Err(e) => report_error(&store, "load task", &e),
            }
            match commands::list_comments(id).await {
                Ok(loaded) => set_comments.set(loaded),
                Err(e) => report_error(&store, "load comments", &e),
            }
        });
    });

    let complete = move |id: u32| {
        spawn_local(async move {
            match commands::complete_task(id).await {
                Ok(task) => {
                    log::info!("[APP] task {} completed", task.id);
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => report_error(&store, "complete task", &e),
            }
        });
    };

    move || {
        detail.get().map(|t| {
            let id = t.id;
            let done = t.status == Status::Completed;
            let description = render_markdown(&t.description);
            let sub_title = (!t.sub_title.is_empty()).then(|| t.sub_title.clone());
            let assignee = t.assignee.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "Unassigned".to_string());
            let assigner = t.assigner.as_ref().map(|u| u.name.clone());
            let due = t.due_date.as_deref().map(format_date);
            let hours = match (t.estimated_hours, t.actual_hours) {
                (Some(est), Some(actual)) => Some(format!("{:.1}h / {:.1}h", actual, est)),
                (Some(est), None) => Some(format!("est. {:.1}h", est)),
                _ => None,
            };

            view! {
                <aside class="task-detail">
                    <header class="task-detail-header">
                        <h2>{t.title.clone()}</h2>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"✕"</button>
                    </header>
                    {sub_title.map(|s| view! { <p class="task-subtitle">{s}</p> })}
                    <div class="task-detail-meta">
                        <span class=format!("badge priority-{}", t.priority.as_str())>{t.priority.label()}</span>
                        <span class=format!("badge status-{}", t.status.as_str())>{t.status.label()}</span>
                        <span>"Assignee: " {assignee}</span>
                        {assigner.map(|name| view! { <span>"Created by: " {name}</span> })}
                        {due.map(|d| view! { <span>"Due: " {d}</span> })}
                        {hours.map(|h| view! { <span>"Hours: " {h}</span> })}
                    </div>
                    <div class="markdown-body" inner_html=description></div>
                    <Show when=move || !done>
                        <button class="complete-btn" on:click=move |_| complete(id)>"Mark complete"</button>
                    </Show>
                    <section class="comments">
                        <h3>{move || format!("Comments ({})", comments.with(|c| c.len()))}</h3>
                        <ul class="comment-list">
                            <For
                                each=move || comments.get()
                                key=|c| (c.id, c.is_edited)
                                children=|c| view! { <CommentItem comment=c /> }
                            />
                        </ul>
                    </section>
                </aside>
            }
        })
    }
}
