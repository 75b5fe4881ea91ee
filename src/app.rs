//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::browse::{BooksPage, MoviesPage};
use crate::pages::detail::{BookDetailPage, MovieDetailPage};
use crate::pages::home::HomePage;
use crate::pages::latest::{LatestBooksPage, LatestMoviesPage};
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and UI state contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let ui = RwSignal::new(UiState {
        theme: theme::read_preference(),
        ..UiState::default()
    });

    provide_context(session);
    provide_context(ui);

    // Keep the document class in sync with the theme.
    Effect::new(move || theme::apply(ui.get().theme));

    view! {
        <Stylesheet id="leptos" href="/pkg/chaptered.css"/>
        <Title text="Chaptered"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("books") view=BooksPage/>
                    <Route path=(StaticSegment("books"), ParamSegment("id")) view=BookDetailPage/>
                    <Route path=StaticSegment("movies") view=MoviesPage/>
                    <Route path=(StaticSegment("movies"), ParamSegment("id")) view=MovieDetailPage/>
                    <Route path=StaticSegment("latest-books") view=LatestBooksPage/>
                    <Route path=StaticSegment("latest-movies") view=LatestMoviesPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
