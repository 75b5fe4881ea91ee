//! Site navigation bar with theme toggle, mobile menu, and account area.
//!
//! The account area subscribes to the shared `SessionStore`: it renders a
//! login link while logged out and a username dropdown with profile and
//! logout actions once a session exists.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let ui = expect_context::<RwSignal<UiState>>();

    let logged_in = move || session.is_logged_in();
    let display_name = move || {
        session
            .get()
            .map(|s| s.username)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "Account".to_owned())
    };

    let on_theme = move |_| {
        ui.update(|u| u.theme = theme::toggle(u.theme));
    };
    let theme_label = move || {
        if ui.get().theme.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        }
    };

    let on_hamburger = move |_| {
        ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);
    };
    let close_menus = move |_| {
        ui.update(|u| {
            u.mobile_menu_open = false;
            u.account_menu_open = false;
        });
    };
    let on_account = move |_| {
        ui.update(|u| u.account_menu_open = !u.account_menu_open);
    };

    let menu_class = move || {
        if ui.get().mobile_menu_open {
            "nav-menu nav-menu--open"
        } else {
            "nav-menu"
        }
    };

    let on_logout = move |_| {
        session.clear();
        ui.update(|u| u.account_menu_open = false);
        #[cfg(feature = "hydrate")]
        {
            // Navigate to login via window.location for a clean state.
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <a href="/" class="navbar__logo" on:click=close_menus>
                    "Chaptered"
                </a>

                <button class="navbar__hamburger" on:click=on_hamburger title="Menu">
                    "\u{2630}"
                </button>

                <div class=menu_class>
                    <a href="/" class="nav-link" on:click=close_menus>
                        "Home"
                    </a>
                    <a href="/books" class="nav-link" on:click=close_menus>
                        "Books"
                    </a>
                    <a href="/movies" class="nav-link" on:click=close_menus>
                        "Movies"
                    </a>
                    <a href="/latest-books" class="nav-link" on:click=close_menus>
                        "Latest Books"
                    </a>
                    <a href="/latest-movies" class="nav-link" on:click=close_menus>
                        "Latest Movies"
                    </a>

                    <button class="nav-link navbar__theme" on:click=on_theme>
                        {theme_label}
                    </button>

                    <Show
                        when=logged_in
                        fallback=move || {
                            view! {
                                <a href="/login" class="nav-link nav-link--login" on:click=close_menus>
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <div class="navbar__account">
                            <button class="nav-link navbar__account-button" on:click=on_account>
                                {display_name} " \u{25be}"
                            </button>
                            <Show when=move || ui.get().account_menu_open>
                                <div class="navbar__dropdown">
                                    <a href="/profile" class="navbar__dropdown-link" on:click=close_menus>
                                        "Profile"
                                    </a>
                                    <button class="navbar__dropdown-link" on:click=on_logout>
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
