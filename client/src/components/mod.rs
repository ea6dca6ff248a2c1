//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and presentational leaves while
//! reading/writing shared state from Leptos context providers.

pub mod app_layout;
pub mod auth_gate;
pub mod form_input;
pub mod generation_indicator;
pub mod header;
pub mod loading;
pub mod project_card;
pub mod sidebar;
pub mod stats_section;
pub mod tab_bar;
pub mod theme_toggle;
