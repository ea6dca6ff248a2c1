//! Dashboard card linking to a project.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::Project;
use crate::util::route::project_href;

/// Longest description excerpt shown on a card.
const EXCERPT_CHARS: usize = 140;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = project_href(&project.id);
    let excerpt = excerpt(&project.description, EXCERPT_CHARS);
    let features = match project.feature_count {
        1 => "1 feature".to_owned(),
        n => format!("{n} features"),
    };

    view! {
        <a class="project-card" href=href>
            <span class="project-card__name">{project.name}</span>
            <span class="project-card__excerpt">{excerpt}</span>
            <span class="project-card__meta">{features}</span>
        </a>
    }
}

/// Cut `text` at a char boundary, appending an ellipsis when shortened.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}\u{2026}", cut.trim_end())
}
