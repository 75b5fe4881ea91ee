//! Login page: email + password against the token endpoint.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionStore, login_username};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        // The token endpoint wants a username; reuse the cached one or
        // derive it from the email's local part.
        let username = login_username(session.username().as_deref(), &email.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::state::session::Session;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result =
                    crate::net::api::login(session, &username, &password.get_untracked()).await;

                match result {
                    Ok(tokens) => {
                        session.establish(Session::from_login(
                            &tokens.access,
                            tokens.refresh.as_deref().unwrap_or(""),
                            tokens.user.as_ref(),
                        ));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.user_message("Login failed. Please try again."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, username);
        }
    };

    view! {
        <div class="auth-page">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
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
                <Show when=move || !error.get().is_empty()>
                    <p class="error-message">{move || error.get()}</p>
                </Show>
                <button type="submit">"Login"</button>
            </form>
            <p>"Don't have an account? " <a href="/register">"Register"</a></p>
        </div>
    }
}
