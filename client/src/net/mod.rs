//! Networking modules for the identity service and the project REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `identity` turns the identity service into an
//! observable auth stream, `generation` drives the project-generation poller,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod generation;
pub mod identity;
pub mod types;
