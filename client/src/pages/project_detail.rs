//! Project detail page with overview and feature tabs.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::app_layout::AppLayout;
use crate::components::loading::LoadingInline;
use crate::components::tab_bar::TabBar;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::{Feature, Project};
use crate::util::markdown::render_markdown_html;
use crate::util::route::{ProjectTab, feature_href, new_feature_href, non_empty, project_href};

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    view! {
        <AppLayout>
            <ProjectDetailView/>
        </AppLayout>
    }
}

#[component]
fn ProjectDetailView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let query = use_query_map();

    let project_id = Memo::new(move |_| non_empty(params.read().get("projectId")));
    let tab = Memo::new(move |_| ProjectTab::from_query(query.read().get("tab").as_deref()));

    let detail = LocalResource::new(move || {
        let config = config.clone();
        let id = project_id.get();
        async move {
            let Some(id) = id else {
                return None;
            };
            let project = api::fetch_project(&config, &id).await?;
            let features = api::list_project_features(&config, &id).await;
            Some((project, features))
        }
    });

    let tabs = ProjectTab::ALL.iter().map(|t| (t.as_str(), t.label())).collect::<Vec<_>>();

    view! {
        <div class="detail-page">
            <Suspense fallback=|| view! { <LoadingInline message="Loading project..."/> }>
                {move || {
                    let tabs = tabs.clone();
                    Suspend::new(async move {
                        match detail.await {
                            Some((project, features)) => {
                                let base = project_href(&project.id);
                                let add_href = new_feature_href(Some(&project.id));
                                let name = project.name.clone();
                                let count = format!("{} features", features.len());
                                view! {
                                    <header class="page-header">
                                        <div>
                                            <h1 class="page-header__title">{name}</h1>
                                            <p class="page-header__subtitle">{count}</p>
                                        </div>
                                        <a class="btn btn--primary" href=add_href>
                                            "Add feature"
                                        </a>
                                    </header>
                                    <TabBar
                                        base=base
                                        tabs=tabs
                                        active=Signal::derive(move || tab.get().as_str())
                                    />
                                    {move || match tab.get() {
                                        ProjectTab::Overview => project_overview(&project).into_any(),
                                        ProjectTab::Features => feature_list(&features).into_any(),
                                    }}
                                }
                                    .into_any()
                            }
                            None => not_found().into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

fn project_overview(project: &Project) -> impl IntoView {
    let html = render_markdown_html(&project.description);
    let created = project.created_at.clone().map(|at| format!("Created {at}"));
    view! {
        <section class="detail-page__overview">
            <div class="markdown" inner_html=html></div>
            {created.map(|c| view! { <p class="detail-page__meta">{c}</p> })}
        </section>
    }
}

fn feature_list(features: &[Feature]) -> impl IntoView {
    if features.is_empty() {
        return view! { <p class="empty-state">"No features yet."</p> }.into_any();
    }
    view! {
        <ul class="feature-list">
            {features
                .iter()
                .map(|feature| {
                    view! {
                        <li class="feature-list__item">
                            <a href=feature_href(&feature.id)>{feature.title.clone()}</a>
                            <span class="badge">{feature.status.label()}</span>
                            <span class="badge badge--muted">{feature.priority.as_str()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}

fn not_found() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"Project not found."</p>
            <a class="btn" href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}
