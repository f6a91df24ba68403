//! Sign-in page with an inline registration mode.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::nav::routes::HOME_PATH;
use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{LoginRequest, RegisterRequest};

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub(crate) fn validate_login(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

pub(crate) fn validate_register(
    username: &str,
    password: &str,
    confirm: &str,
    email: &str,
    full_name: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email address.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: optional(full_name),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::SignIn);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = client.clone();
        let navigate = navigate.clone();
        match mode.get_untracked() {
            Mode::SignIn => {
                let credentials = match validate_login(&username.get_untracked(), &password.get_untracked()) {
                    Ok(credentials) => credentials,
                    Err(message) => {
                        info.set(message.to_owned());
                        return;
                    }
                };
                busy.set(true);
                info.set(String::new());
                leptos::task::spawn_local(async move {
                    if api::sign_in(&client, &credentials).await.is_ok() {
                        password.set(String::new());
                        navigate(HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    busy.set(false);
                });
            }
            Mode::Register => {
                let request = match validate_register(
                    &username.get_untracked(),
                    &password.get_untracked(),
                    &confirm.get_untracked(),
                    &email.get_untracked(),
                    &full_name.get_untracked(),
                ) {
                    Ok(request) => request,
                    Err(message) => {
                        info.set(message.to_owned());
                        return;
                    }
                };
                busy.set(true);
                info.set(String::new());
                leptos::task::spawn_local(async move {
                    if api::register(&client, &request).await.is_ok() {
                        client.notices().success("Account created, please sign in.");
                        password.set(String::new());
                        confirm.set(String::new());
                        mode.set(Mode::SignIn);
                    }
                    busy.set(false);
                });
            }
        }
    };

    let toggle_mode = move |_| {
        info.set(String::new());
        mode.update(|m| {
            *m = match m {
                Mode::SignIn => Mode::Register,
                Mode::Register => Mode::SignIn,
            };
        });
    };

    let registering = move || mode.get() == Mode::Register;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Library Console"</h1>
                <p class="login-card__subtitle">
                    {move || if registering() { "Create an account" } else { "Sign in to continue" }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=registering>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name (optional)"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if registering() { "Register" } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-link" type="button" on:click=toggle_mode>
                    {move || if registering() { "Back to sign in" } else { "No account? Register" }}
                </button>
            </div>
        </div>
    }
}
