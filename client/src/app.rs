//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::ApiClient;
use crate::net::config::ApiConfig;
use crate::net::transport::GlooTransport;
use crate::pages::{courses::CoursesPage, dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::{AppAuth, AuthState};
use crate::util::auth::ProtectedRoute;
use crate::util::navigation::BrowserNavigator;
use crate::util::session_store::SessionStore;
use crate::util::storage::BrowserStorage;

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

/// Wire the production seams into one client.
#[must_use]
pub fn browser_api_client() -> ApiClient {
    ApiClient::new(
        ApiConfig::from_env(),
        Arc::new(GlooTransport),
        SessionStore::new(Arc::new(BrowserStorage)),
        Arc::new(BrowserNavigator),
    )
}

/// Root application component.
///
/// Auth starts in the loading state and is hydrated from storage in a
/// client-side effect, so the server always renders guarded routes as loading.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session: AppAuth = AppAuth::new(browser_api_client(), auth);

    provide_context(auth);
    provide_context(session.clone());

    Effect::new(move |_| session.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/skillnest.css"/>
        <Title text="SkillNest"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("courses")
                    view=|| view! { <ProtectedRoute><CoursesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/courses"/> }/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page Not Found"</p>
            <a href="/courses">"Back to Courses"</a>
        </div>
    }
}
