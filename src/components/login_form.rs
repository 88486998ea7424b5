//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, LoginArgs};
use crate::error::ApiError;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let args = LoginArgs {
                email: &email_value,
                password: &password_value,
            };
            match commands::login(&args).await {
                Ok(user) => {
                    set_password.set(String::new());
                    store.current_user().set(Some(user));
                }
                Err(ApiError::Unauthorized) | Err(ApiError::Status { status: 400, .. }) => {
                    set_error.set(Some("Invalid email or password".to_string()));
                }
                Err(e) => {
                    log::error!("[APP] login failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <form class="login-form" on:submit=on_submit>
                <h1>"Tarefa"</h1>
                <p class="login-subtitle">"Sign in to your account"</p>
                <input
                    type="email"
                    placeholder="Email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
