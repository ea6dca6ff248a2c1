//! Feature creation form.

#[cfg(test)]
#[path = "feature_create_test.rs"]
mod feature_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::app_layout::AppLayout;
use crate::components::form_input::{FormInput, FormMessage, FormSelect, FormTextarea};
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::{NewFeature, Priority, Project};
use crate::util::route::{feature_href, non_empty};

/// Project to preselect: the requested one if it exists, else the first.
pub(crate) fn pick_project(requested: Option<&str>, projects: &[Project]) -> Option<String> {
    requested
        .and_then(|id| projects.iter().find(|p| p.id == id))
        .or_else(|| projects.first())
        .map(|p| p.id.clone())
}

pub(crate) fn validate_feature(
    project_id: &str,
    title: &str,
    description: &str,
    priority: &str,
) -> Result<NewFeature, &'static str> {
    if project_id.trim().is_empty() {
        return Err("Choose a project.");
    }
    let title = title.trim();
    if title.is_empty() {
        return Err("Give the feature a title.");
    }
    Ok(NewFeature {
        project_id: project_id.trim().to_owned(),
        title: title.to_owned(),
        description: description.trim().to_owned(),
        priority: Priority::parse(priority),
    })
}

#[component]
pub fn FeatureCreatePage() -> impl IntoView {
    view! {
        <AppLayout>
            <FeatureCreateView/>
        </AppLayout>
    }
}

#[component]
fn FeatureCreateView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();
    let navigate = use_navigate();

    let requested = non_empty(query.read_untracked().get("projectId"));
    let project_id = RwSignal::new(requested.clone().unwrap_or_default());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(Priority::default().as_str().to_owned());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let projects = LocalResource::new({
        let config = config.clone();
        move || {
            let config = config.clone();
            async move { api::list_projects(&config).await }
        }
    });

    Effect::new(move || {
        let Some(list) = projects.get() else {
            return;
        };
        if let Some(id) = pick_project(requested.as_deref(), &list) {
            project_id.set(id);
        }
    });

    let project_options = Signal::derive(move || {
        projects
            .get()
            .unwrap_or_default()
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect::<Vec<_>>()
    });
    let priority_options = Signal::stored(
        Priority::ALL.iter().map(|p| (p.as_str().to_owned(), p.as_str().to_owned())).collect::<Vec<_>>(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let feature = match validate_feature(
            &project_id.get_untracked(),
            &title.get_untracked(),
            &description.get_untracked(),
            &priority.get_untracked(),
        ) {
            Ok(feature) => feature,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_feature(&config, &feature).await {
                Ok(created) => navigate(&feature_href(&created.id), NavigateOptions::default()),
                Err(e) => {
                    log::warn!("create feature failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <header class="page-header">
                <h1 class="page-header__title">"New feature"</h1>
            </header>
            <form class="form-card" on:submit=on_submit>
                <FormSelect label="Project" value=project_id options=project_options/>
                <FormInput label="Title" value=title required=true disabled=busy/>
                <FormTextarea label="Description" value=description rows=6 disabled=busy/>
                <FormSelect label="Priority" value=priority options=priority_options/>
                <FormMessage message=error error=true/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create feature" }}
                </button>
            </form>
        </div>
    }
}
