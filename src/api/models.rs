//! Response models
//!
//! Only the fields surfaced as columns are modelled. Nested structures the
//! tables pass through untouched are kept as raw JSON.

use crate::partition::ParentKey;
use crate::types::JsonValue;
use serde::Deserialize;

/// A project
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub include_in_snippet_by_default: Option<bool>,
    #[serde(default)]
    pub default_client_side_availability: Option<JsonValue>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "_links", default)]
    pub links: Option<JsonValue>,
    /// Present when requested with `expand=environments`
    #[serde(default)]
    pub environments: Option<JsonValue>,
}

impl ParentKey for Project {
    fn parent_key(&self) -> &str {
        &self.key
    }
}

/// An environment within a project
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub mobile_key: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub default_ttl: Option<i64>,
    #[serde(default)]
    pub secure_mode: Option<bool>,
    #[serde(default)]
    pub default_track_events: Option<bool>,
    #[serde(default)]
    pub require_comments: Option<bool>,
    #[serde(default)]
    pub confirm_changes: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub approval_settings: Option<JsonValue>,
    #[serde(rename = "_links", default)]
    pub links: Option<JsonValue>,
}

/// A feature flag
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "_version", default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub creation_date: Option<i64>,
    #[serde(default)]
    pub include_in_snippet: Option<bool>,
    #[serde(default)]
    pub client_side_availability: Option<JsonValue>,
    #[serde(default)]
    pub variations: Option<JsonValue>,
    #[serde(default)]
    pub temporary: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "_links", default)]
    pub links: Option<JsonValue>,
    #[serde(default)]
    pub maintainer_id: Option<String>,
    #[serde(rename = "_maintainer", default)]
    pub maintainer: Option<JsonValue>,
    #[serde(default)]
    pub maintainer_team_key: Option<String>,
    #[serde(default)]
    pub goal_ids: Option<JsonValue>,
    #[serde(default)]
    pub experiments: Option<JsonValue>,
    #[serde(default)]
    pub custom_properties: Option<JsonValue>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub archived_date: Option<i64>,
    #[serde(default)]
    pub defaults: Option<JsonValue>,
    #[serde(default)]
    pub environments: Option<JsonValue>,
}

/// An API access token
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(rename = "_member", default)]
    pub member: Option<JsonValue>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_date: Option<i64>,
    #[serde(default)]
    pub last_modified: Option<i64>,
    #[serde(default)]
    pub custom_role_ids: Option<JsonValue>,
    #[serde(default)]
    pub inline_role: Option<JsonValue>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub service_token: Option<bool>,
    #[serde(default)]
    pub default_api_version: Option<i64>,
    #[serde(default)]
    pub last_used: Option<i64>,
    #[serde(rename = "_links", default)]
    pub links: Option<JsonValue>,
}

/// An audit log entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_accountId", default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub accesses: Option<JsonValue>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub subject: Option<JsonValue>,
    #[serde(default)]
    pub member: Option<JsonValue>,
    #[serde(default)]
    pub token: Option<JsonValue>,
    #[serde(default)]
    pub app: Option<JsonValue>,
    #[serde(default)]
    pub title_verb: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub target: Option<JsonValue>,
    #[serde(default)]
    pub parent: Option<JsonValue>,
}

/// An account member
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "_verified", default)]
    pub verified: Option<bool>,
    #[serde(rename = "_pendingInvite", default)]
    pub pending_invite: Option<bool>,
    #[serde(rename = "_pendingEmail", default)]
    pub pending_email: Option<String>,
    #[serde(default)]
    pub custom_roles: Option<JsonValue>,
    #[serde(default)]
    pub mfa: Option<String>,
    #[serde(default)]
    pub excluded_dashboards: Option<JsonValue>,
    #[serde(rename = "_lastSeen", default)]
    pub last_seen: Option<i64>,
    #[serde(default)]
    pub teams: Option<JsonValue>,
    #[serde(default)]
    pub permission_grants: Option<JsonValue>,
    #[serde(default)]
    pub creation_date: Option<i64>,
}

/// A team
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub access: Option<JsonValue>,
    #[serde(default)]
    pub creation_date: Option<i64>,
    #[serde(default)]
    pub last_modified: Option<i64>,
    #[serde(rename = "_links", default)]
    pub links: Option<JsonValue>,
    #[serde(default)]
    pub roles: Option<JsonValue>,
    #[serde(rename = "_idpSynced", default)]
    pub idp_synced: Option<bool>,
    #[serde(default)]
    pub members: Option<JsonValue>,
    #[serde(default)]
    pub projects: Option<JsonValue>,
    #[serde(default)]
    pub maintainers: Option<JsonValue>,
    #[serde(rename = "_version", default)]
    pub version: Option<i64>,
}
