//! Profile page: view and inline-edit the current user's profile, plus a
//! password reset form. Redirects to login when no session exists.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::Profile;
use crate::state::session::SessionStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        if !session.is_logged_in() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let profile = LocalResource::new(move || api::fetch_profile(session));

    view! {
        <div class="auth-page">
            <div class="profile-card">
                <h2>"My Profile"</h2>

                <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                    {move || {
                        profile
                            .get()
                            .map(|result| match result {
                                Ok(Some(loaded)) => {
                                    view! { <ProfileBody loaded=loaded profile=profile/> }
                                        .into_any()
                                }
                                Ok(None) => {
                                    view! { <p class="error-message">"No profile found."</p> }
                                        .into_any()
                                }
                                Err(_) => {
                                    view! {
                                        <p class="error-message">
                                            "Failed to load profile. Please log in again."
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

#[component]
fn ProfileBody(
    loaded: Profile,
    profile: LocalResource<Result<Option<Profile>, crate::net::error::ApiError>>,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let username = loaded
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .or_else(|| session.username())
        .unwrap_or_else(|| "Not set".to_owned());
    let email = loaded
        .email
        .clone()
        .filter(|e| !e.is_empty())
        .or_else(|| session.snapshot().map(|s| s.email).filter(|e| !e.is_empty()))
        .unwrap_or_else(|| "Not set".to_owned());
    let full_name = loaded.full_name().unwrap_or_else(|| "Not set".to_owned());
    let bio_display = loaded
        .bio
        .clone()
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| "Not set".to_owned());
    let avatar_letter = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_owned());
    let picture = loaded.profile_picture.clone().filter(|p| !p.is_empty());
    let profile_key = loaded.key();

    // Edit state, seeded from the loaded profile.
    let edit_mode = RwSignal::new(false);
    let first_name = RwSignal::new(loaded.first_name.clone().unwrap_or_default());
    let last_name = RwSignal::new(loaded.last_name.clone().unwrap_or_default());
    let bio = RwSignal::new(loaded.bio.clone().unwrap_or_default());
    let edit_msg = RwSignal::new(String::new());

    // Password reset state.
    let show_reset = RwSignal::new(false);
    let pwd1 = RwSignal::new(String::new());
    let pwd2 = RwSignal::new(String::new());
    let reset_msg = RwSignal::new(String::new());

    let on_edit_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        edit_msg.set(String::new());

        let Some(id) = profile_key else {
            edit_msg.set("Cannot update profile: missing ID.".to_owned());
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = api::update_profile(
                    session,
                    id,
                    first_name.get_untracked().trim(),
                    last_name.get_untracked().trim(),
                    bio.get_untracked().trim(),
                )
                .await;

                match result {
                    Ok(()) => {
                        edit_mode.set(false);
                        edit_msg.set("Profile updated!".to_owned());
                        profile.refetch();
                    }
                    Err(err) => {
                        edit_msg.set(err.user_message("Failed to update profile."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, profile);
        }
    };

    let on_reset_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pwd1.get_untracked() != pwd2.get_untracked() {
            reset_msg.set("Passwords do not match.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::change_password(session, &pwd1.get_untracked()).await {
                    Ok(()) => {
                        reset_msg.set("Password updated successfully.".to_owned());
                        show_reset.set(false);
                    }
                    Err(_) => {
                        reset_msg.set("Something went wrong. Please try again.".to_owned());
                    }
                }
            });
        }
    };

    view! {
        {match picture {
            Some(url) => view! { <img class="profile-card__img" src=url alt="avatar"/> }.into_any(),
            None => {
                view! { <div class="profile-card__avatar">{avatar_letter}</div> }.into_any()
            }
        }}

        <dl class="profile-card__fields">
            <dt>"Username"</dt>
            <dd>{username}</dd>
            <dt>"Name"</dt>
            <dd>{full_name}</dd>
            <dt>"Email"</dt>
            <dd>{email}</dd>
            <dt>"Bio"</dt>
            <dd>{bio_display}</dd>
        </dl>

        <Show
            when=move || edit_mode.get()
            fallback=move || {
                view! {
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            edit_mode.set(true);
                            edit_msg.set(String::new());
                        }
                    >
                        "Edit Profile"
                    </button>
                }
            }
        >
            <form class="profile-card__form" on:submit=on_edit_save>
                <label>
                    "First Name"
                    <input
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Last Name"
                    <input
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Bio"
                    <input
                        type="text"
                        placeholder="Tell us about yourself"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    />
                </label>
                <div class="profile-card__actions">
                    <button type="submit" class="btn btn--primary">
                        "Save"
                    </button>
                    <button type="button" class="btn" on:click=move |_| edit_mode.set(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
        <Show when=move || !edit_msg.get().is_empty()>
            <p class="profile-card__msg">{move || edit_msg.get()}</p>
        </Show>

        <Show
            when=move || show_reset.get()
            fallback=move || {
                view! {
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            pwd1.set(String::new());
                            pwd2.set(String::new());
                            reset_msg.set(String::new());
                            show_reset.set(true);
                        }
                    >
                        "Reset Password"
                    </button>
                }
            }
        >
            <form class="profile-card__form" on:submit=on_reset_save>
                <label>
                    "New password"
                    <input
                        type="password"
                        required
                        prop:value=move || pwd1.get()
                        on:input=move |ev| pwd1.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        required
                        prop:value=move || pwd2.get()
                        on:input=move |ev| pwd2.set(event_target_value(&ev))
                    />
                </label>
                <div class="profile-card__actions">
                    <button type="submit" class="btn btn--primary">
                        "Save"
                    </button>
                    <button type="button" class="btn" on:click=move |_| show_reset.set(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
        <Show when=move || !reset_msg.get().is_empty()>
            <p class="profile-card__msg">{move || reset_msg.get()}</p>
        </Show>
    }
}
