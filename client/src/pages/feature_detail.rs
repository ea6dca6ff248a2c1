//! Feature detail page with overview, tasks and discussion tabs.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::app_layout::AppLayout;
use crate::components::loading::LoadingInline;
use crate::components::tab_bar::TabBar;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::Feature;
use crate::util::markdown::render_markdown_html;
use crate::util::route::{FeatureTab, feature_href, non_empty, project_href};

#[component]
pub fn FeatureDetailPage() -> impl IntoView {
    view! {
        <AppLayout>
            <FeatureDetailView/>
        </AppLayout>
    }
}

#[component]
fn FeatureDetailView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let query = use_query_map();

    let feature_id = Memo::new(move |_| non_empty(params.read().get("featureId")));
    let tab = Memo::new(move |_| FeatureTab::from_query(query.read().get("tab").as_deref()));

    let feature = LocalResource::new(move || {
        let config = config.clone();
        let id = feature_id.get();
        async move {
            match id {
                Some(id) => api::fetch_feature(&config, &id).await,
                None => None,
            }
        }
    });

    let tabs = FeatureTab::ALL.iter().map(|t| (t.as_str(), t.label())).collect::<Vec<_>>();

    view! {
        <div class="detail-page">
            <Suspense fallback=|| view! { <LoadingInline message="Loading feature..."/> }>
                {move || {
                    let tabs = tabs.clone();
                    Suspend::new(async move {
                        let Some(feature) = feature.await else {
                            return not_found().into_any();
                        };
                        let base = feature_href(&feature.id);
                        let back = project_href(&feature.project_id);
                        let title = feature.title.clone();
                        let status = feature.status.label();
                        let priority = feature.priority.as_str();
                        view! {
                            <header class="page-header">
                                <div>
                                    <a class="page-header__back" href=back>"Back to project"</a>
                                    <h1 class="page-header__title">{title}</h1>
                                    <p class="page-header__subtitle">
                                        <span class="badge">{status}</span>
                                        <span class="badge badge--muted">{priority}</span>
                                    </p>
                                </div>
                            </header>
                            <TabBar base=base tabs=tabs active=Signal::derive(move || tab.get().as_str())/>
                            {move || match tab.get() {
                                FeatureTab::Overview => feature_overview(&feature).into_any(),
                                FeatureTab::Tasks => task_list(&feature.tasks).into_any(),
                                FeatureTab::Discussion => {
                                    view! {
                                        <section class="detail-page__discussion">
                                            <p class="empty-state">"No discussion yet."</p>
                                        </section>
                                    }
                                        .into_any()
                                }
                            }}
                        }
                            .into_any()
                    })
                }}
            </Suspense>
        </div>
    }
}

fn feature_overview(feature: &Feature) -> impl IntoView {
    let html = render_markdown_html(&feature.description);
    view! {
        <section class="detail-page__overview">
            <div class="markdown" inner_html=html></div>
        </section>
    }
}

fn task_list(tasks: &[String]) -> impl IntoView {
    if tasks.is_empty() {
        return view! { <p class="empty-state">"No tasks yet."</p> }.into_any();
    }
    view! {
        <ol class="task-list">
            {tasks.iter().map(|task| view! { <li class="task-list__item">{task.clone()}</li> }).collect::<Vec<_>>()}
        </ol>
    }
        .into_any()
}

fn not_found() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"Feature not found."</p>
            <a class="btn" href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}
