//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{API_BASE_META, ClientConfig};
use crate::net::identity::Identity;
use crate::pages::{
    dashboard::DashboardPage, feature_create::FeatureCreatePage, feature_detail::FeatureDetailPage,
    landing::LandingPage, login::LoginPage, project_create::ProjectCreatePage, project_detail::ProjectDetailPage,
    settings::SettingsPage, signup::SignupPage,
};
use crate::state::account::{AccountState, initialize_user};
use crate::state::auth::AuthState;
use crate::state::generation::GenerationState;
use crate::state::sidebar::SidebarState;
use crate::state::theme::Theme;
use crate::util::theme::{self, BrowserHost};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = ClientConfig::load().api_base;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
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
/// Provides the shared state contexts, mirrors the identity stream into
/// `AuthState`/`AccountState`, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let identity = Identity::new(config.clone());

    let auth = RwSignal::new(AuthState::default());
    let account = RwSignal::new(AccountState::default());
    let theme_signal = RwSignal::new(Theme::default());
    let sidebar = RwSignal::new(SidebarState::default());
    let generation = RwSignal::new(GenerationState::default());

    provide_context(config.clone());
    provide_context(identity.clone());
    provide_context(auth);
    provide_context(account);
    provide_context(theme_signal);
    provide_context(sidebar);
    provide_context(generation);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let preferred = theme::read_preference(&BrowserHost);
        theme::apply(&BrowserHost, preferred);
        theme_signal.set(preferred);
    });

    let subscription = identity.hub().subscribe(move |session| {
        let _ = auth.try_update(|a| a.observe(session.clone()));
        if let Some(user_id) = account.try_update(|a| a.observe(session.as_ref())).flatten() {
            let config = config.clone();
            leptos::task::spawn_local(async move { initialize_user(&config, &user_id).await });
        }
    });
    on_cleanup(move || subscription.unsubscribe());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move { identity.restore().await });

    view! {
        <Stylesheet id="leptos" href="/pkg/sprintdeck.css"/>
        <Title text="SprintDeck"/>
        <Meta name="description" content="AI-assisted sprint planning"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("projects") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=(StaticSegment("projects"), StaticSegment("create")) view=ProjectCreatePage/>
                <Route path=(StaticSegment("projects"), ParamSegment("projectId")) view=ProjectDetailPage/>
                <Route path=(StaticSegment("features"), StaticSegment("create")) view=FeatureCreatePage/>
                <Route path=(StaticSegment("features"), ParamSegment("featureId")) view=FeatureDetailPage/>
            </Routes>
        </Router>
    }
}
