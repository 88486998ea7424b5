//! Tarefa Frontend App
//!
//! Session gate, sidebar layout and page switching.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{LoginForm, NotificationDrawer, Sidebar, TopBar};
use crate::context::AppContext;
use crate::pages::{CreatedTasksPage, DashboardPage, MyTasksPage, TeamViewPage, TeamsPage, UsersPage};
use crate::permissions::{can_access, NavItem};
use crate::store::{report_error, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_page, set_current_page) = signal(NavItem::Dashboard);
    let (checking_session, set_checking_session) = signal(commands::access_token().is_some());
    let drawer_open = RwSignal::new(false);
    // Bumped per sign-in so a stale poll loop stops
    let session = RwSignal::new(0u32);

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (current_page, set_current_page));
    provide_context(ctx);

    // Resume a stored session
    if checking_session.get_untracked() {
        spawn_local(async move {
            match commands::current_user().await {
                Ok(user) => {
                    log::info!("[APP] resumed session for {}", user.email);
                    store.current_user().set(Some(user));
                }
                Err(e) => report_error(&store, "resume session", &e),
            }
            set_checking_session.set(false);
        });
    }

    let signed_in = Memo::new(move |_| store.current_user().with(|u| u.is_some()));

    // Teams feed filter dropdowns and the hierarchy page
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        if !signed_in.get() {
            return;
        }
        spawn_local(async move {
            match commands::list_teams().await {
                Ok(loaded) => {
                    log::info!("[APP] loaded {} teams", loaded.len());
                    store.teams().set(loaded);
                }
                Err(e) => report_error(&store, "load teams", &e),
            }
        });
    });

    // Unread badge polling while signed in
    Effect::new(move |_| {
        if !signed_in.get() {
            drawer_open.set(false);
            set_current_page.set(NavItem::Dashboard);
            return;
        }
        session.update(|s| *s += 1);
        let this_session = session.get_untracked();
        spawn_local(async move {
            while session.get_untracked() == this_session && signed_in.get_untracked() {
                match commands::unread_count().await {
                    Ok(count) => store.unread_count().set(count),
                    Err(e) => report_error(&store, "poll unread count", &e),
                }
                TimeoutFuture::new(commands::config().unread_poll_ms).await;
            }
        });
    });

    let page_view = move || {
        let role = store.current_user().with(|u| u.as_ref().map(|u| u.role));
        let page = match role {
            Some(role) if can_access(role, current_page.get()) => current_page.get(),
            _ => NavItem::Dashboard,
        };
        match page {
            NavItem::Dashboard => view! { <DashboardPage /> }.into_any(),
            NavItem::MyTasks => view! { <MyTasksPage /> }.into_any(),
            NavItem::CreatedTasks => view! { <CreatedTasksPage /> }.into_any(),
            NavItem::TeamView => view! { <TeamViewPage /> }.into_any(),
            NavItem::Teams => view! { <TeamsPage /> }.into_any(),
            NavItem::Users => view! { <UsersPage /> }.into_any(),
        }
    };

    view! {
        <Show
            when=move || !checking_session.get()
            fallback=|| view! { <div class="loading-screen"><div class="spinner"></div></div> }
        >
            <Show when=move || signed_in.get() fallback=|| view! { <LoginForm /> }>
                <div class="app-layout">
                    <Sidebar />
                    <div class="main-column">
                        <TopBar drawer_open=drawer_open />
                        <main class="main-content">{page_view}</main>
                    </div>
                    <NotificationDrawer open=drawer_open />
                </div>
            </Show>
        </Show>
    }
}
