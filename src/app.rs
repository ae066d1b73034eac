//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;
use crate::state::route::RouteState;
use crate::state::tasks::TasksState;
use crate::state::ui::UiState;
use crate::util::session::SessionStore;

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
/// Provides the session store and all shared state contexts, settles the
/// auth session from storage, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let auth = RwSignal::new(AuthState::default());
    let route = RwSignal::new(RouteState::default());
    let tasks = RwSignal::new(TasksState::default());
    let profile = RwSignal::new(ProfileState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session.clone());
    provide_context(auth);
    provide_context(route);
    provide_context(tasks);
    provide_context(profile);
    provide_context(ui);

    // Settle the session from storage once the client is up. The check is
    // synchronous and local; effects never run during SSR, so the server
    // always renders the Loading branch and no redirect can flash.
    {
        let session = session.clone();
        Effect::new(move || {
            if auth.get_untracked().loading {
                auth.set(crate::state::auth::restore(&session));
            }
        });
    }

    // Theme preference applies once at startup; toggles handle the rest.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/taskdeck.css"/>
        <Title text="Taskdeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
