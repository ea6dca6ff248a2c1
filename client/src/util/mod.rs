//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure view math
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod count_up;
pub mod markdown;
pub mod route;
pub mod theme;
