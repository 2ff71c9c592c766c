//! LaunchDarkly REST API bindings
//!
//! Typed models for the v2 API, an [`ApiClient`] exposing one method per
//! endpoint used by the tables, and the per-connection [`ClientCache`].

mod cache;
mod client;
mod models;

pub use cache::ClientCache;
pub use client::ApiClient;
pub use models::{
    AccessToken, AuditLogEntry, Environment, FeatureFlag, Member, Project, Team,
};
