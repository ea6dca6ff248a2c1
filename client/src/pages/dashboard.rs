//! Dashboard page listing the signed-in user's projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated home route. Projects are fetched over REST once
//! the page mounts; the list is read-only here, creation happens on the
//! generation and feature pages.

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::components::loading::LoadingInline;
use crate::components::project_card::ProjectCard;
use crate::config::ClientConfig;
use crate::net::api;
use crate::state::account::AccountState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppLayout>
            <DashboardView/>
        </AppLayout>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let account = expect_context::<RwSignal<AccountState>>();

    let projects = LocalResource::new(move || {
        let config = config.clone();
        async move { api::list_projects(&config).await }
    });

    let greeting = move || {
        account.with(|a| match &a.profile {
            Some(profile) => format!("Welcome back, {}", profile.display_name),
            None => "Welcome back".to_owned(),
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <div>
                    <h1 class="page-header__title">{greeting}</h1>
                    <p class="page-header__subtitle">"Your projects"</p>
                </div>
                <a class="btn btn--primary" href="/projects/create">"New project"</a>
            </header>
            <Suspense fallback=|| view! { <LoadingInline message="Loading projects..."/> }>
                {move || Suspend::new(async move {
                    let list = projects.await;
                    if list.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"No projects yet."</p>
                                <a class="btn" href="/projects/create">"Generate your first project"</a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="project-grid">
                                {list
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                })}
            </Suspense>
        </div>
    }
}
