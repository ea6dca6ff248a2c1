//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `account`, `theme`, etc.) so individual
//! components can depend on small focused models. Each is provided as an
//! `RwSignal` through Leptos context by the root `App`.

pub mod account;
pub mod auth;
pub mod generation;
pub mod sidebar;
pub mod theme;
