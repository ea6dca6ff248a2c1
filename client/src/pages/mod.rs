//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap their view in `AppLayout`, which
//! carries the auth gate.

pub mod dashboard;
pub mod feature_create;
pub mod feature_detail;
pub mod landing;
pub mod login;
pub mod project_create;
pub mod project_detail;
pub mod settings;
pub mod signup;
