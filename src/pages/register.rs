//! Registration page. Field-level backend errors are rendered verbatim.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        errors.set(Vec::new());

        if password.get_untracked() != confirm.get_untracked() {
            errors.set(vec!["Passwords do not match.".to_owned()]);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let email_value = email.get_untracked();
                // The backend wants a username; use the entered name or the
                // email's local part.
                let name_value = name.get_untracked();
                let username = if name_value.trim().is_empty() {
                    email_value.split('@').next().unwrap_or("").to_owned()
                } else {
                    name_value.trim().to_owned()
                };

                let result = crate::net::api::register(
                    session,
                    &username,
                    &email_value,
                    &password.get_untracked(),
                    &confirm.get_untracked(),
                )
                .await;

                match result {
                    Ok(()) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        let field_errors = err.field_errors();
                        if field_errors.is_empty() {
                            errors.set(vec![
                                err.user_message("Registration failed. Please try again later."),
                            ]);
                        } else {
                            errors.set(
                                field_errors
                                    .into_iter()
                                    .map(|(field, message)| format!("{field}: {message}"))
                                    .collect(),
                            );
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    };

    view! {
        <div class="auth-page">
            <h2>"Register"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Full Name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm Password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <Show when=move || !errors.get().is_empty()>
                    <div class="error-message">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|line| view! { <p>{line}</p> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
                <button type="submit">"Register"</button>
            </form>
            <p>"Already have an account? " <a href="/login">"Login"</a></p>
        </div>
    }
}
