//! Operator profile card and edit form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::ApiClient;
use crate::net::types::{User, UserPatch};
use crate::state::notices::NoticeLevel;

/// Editable profile fields as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProfileForm {
    pub email: String,
    pub full_name: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone().unwrap_or_default(),
            full_name: user.full_name.clone().unwrap_or_default(),
        }
    }
}

fn changed(current: Option<&str>, typed: &str) -> Option<String> {
    let typed = typed.trim();
    (current.unwrap_or_default().trim() != typed).then(|| typed.to_owned())
}

/// Only fields that differ from `current` end up in the patch.
pub(crate) fn profile_patch(current: &User, form: &ProfileForm) -> UserPatch {
    UserPatch {
        username: None,
        email: changed(current.email.as_deref(), &form.email),
        full_name: changed(current.full_name.as_deref(), &form.full_name),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = client.session().clone();
    let form = RwSignal::new(ProfileForm::default());
    let busy = RwSignal::new(false);

    // Seed the form once the restored profile is available.
    Effect::new({
        let session = session.clone();
        move |seeded: Option<bool>| {
            if seeded == Some(true) {
                return true;
            }
            match session.state().user {
                Some(user) => {
                    form.set(ProfileForm::from_user(&user));
                    true
                }
                None => false,
            }
        }
    });

    // Refresh the stored profile from the backend once per visit.
    Effect::new({
        let client = client.clone();
        move |fetched: Option<bool>| {
            if fetched == Some(true) || !client.session().is_authenticated() {
                return fetched.unwrap_or(false);
            }
            let client = client.clone();
            leptos::task::spawn_local(async move {
                if let Ok(user) = api::current_user(&client).await {
                    form.set(ProfileForm::from_user(&user));
                    client.session().set_user(user);
                }
            });
            true
        }
    });

    let on_submit = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let Some(current) = session.state_untracked().user else {
                return;
            };
            let patch = profile_patch(&current, &form.get_untracked());
            if patch.is_empty() {
                client.notices().push(NoticeLevel::Info, "Nothing to update.");
                return;
            }
            busy.set(true);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                if api::update_profile(&client, &patch).await.is_ok() {
                    client.notices().success("Profile saved.");
                }
                busy.set(false);
            });
        }
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="form__field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    let profile_card = move || {
        session.state().user.map(|user| {
            view! {
                <div class="profile-card">
                    <span class="profile-card__name">{user.display_name().to_owned()}</span>
                    <span class="profile-card__meta">{format!("@{}", user.username)}</span>
                    <span class="profile-card__meta">{user.role.label()}</span>
                    {user.created_at.map(|at| view! { <span class="profile-card__meta">{format!("Joined {at}")}</span> })}
                </div>
            }
        })
    };

    view! {
        <section class="form-page">
            {profile_card}
            <form class="form" on:submit=on_submit>
                {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {field("Full name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save profile"
                </button>
            </form>
        </section>
    }
}
