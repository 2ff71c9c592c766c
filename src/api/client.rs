//! Typed LaunchDarkly API client

use super::models::{AccessToken, AuditLogEntry, Environment, FeatureFlag, Member, Project, Team};
use crate::auth::{resolve_access_token, AuthConfig, Authenticator, EnvLookup};
use crate::classify::ErrorClassifier;
use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Page, PageRequest};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Authenticated client for the v2 REST API
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    base_url: Url,
}

impl ApiClient {
    /// Wrap an HTTP client for the API at `base_url`
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("invalid base_url '{base_url}'")));
        }
        Ok(Self { http, base_url })
    }

    /// Resolve credentials and build a client for one connection.
    ///
    /// Fails with a configuration error before any request is made when no
    /// access token can be found.
    pub fn connect(
        config: &ConnectionConfig,
        classifier: Arc<dyn ErrorClassifier>,
        env: EnvLookup,
    ) -> Result<Self> {
        let token = resolve_access_token(config, env)?;
        let auth = match &config.auth_prefix {
            Some(prefix) => AuthConfig::prefixed(prefix.as_str(), token),
            None => AuthConfig::access_token(token),
        };

        let http = HttpClient::new(
            config.http.client_config(&config.base_url),
            Authenticator::new(auth),
            classifier,
        )?;

        info!(base_url = %config.base_url, "created LaunchDarkly API client");
        Self::new(http, &config.base_url)
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub async fn list_projects(&self, request: PageRequest) -> Result<Page<Project>> {
        self.list(&["projects"], &request).await
    }

    /// Fetch one project; `expand` is forwarded when set
    pub async fn get_project(&self, key: &str, expand: Option<&str>) -> Result<Project> {
        self.get(&["projects", key], RequestConfig::new().query_opt("expand", expand))
            .await
    }

    // ========================================================================
    // Environments
    // ========================================================================

    pub async fn list_environments(
        &self,
        project_key: &str,
        request: PageRequest,
    ) -> Result<Page<Environment>> {
        self.list(&["projects", project_key, "environments"], &request)
            .await
    }

    pub async fn get_environment(&self, project_key: &str, key: &str) -> Result<Environment> {
        self.get(
            &["projects", project_key, "environments", key],
            RequestConfig::new(),
        )
        .await
    }

    // ========================================================================
    // Feature flags
    // ========================================================================

    pub async fn list_flags(&self, project_key: &str, request: PageRequest) -> Result<Page<FeatureFlag>> {
        self.list(&["flags", project_key], &request).await
    }

    pub async fn get_flag(&self, project_key: &str, key: &str) -> Result<FeatureFlag> {
        self.get(&["flags", project_key, key], RequestConfig::new())
            .await
    }

    // ========================================================================
    // Access tokens
    // ========================================================================

    pub async fn list_tokens(&self, request: PageRequest) -> Result<Page<AccessToken>> {
        self.list(&["tokens"], &request).await
    }

    pub async fn get_token(&self, id: &str) -> Result<AccessToken> {
        self.get(&["tokens", id], RequestConfig::new()).await
    }

    // ========================================================================
    // Audit log
    // ========================================================================

    pub async fn list_audit_log(&self, request: PageRequest) -> Result<Page<AuditLogEntry>> {
        self.list(&["auditlog"], &request).await
    }

    pub async fn get_audit_log_entry(&self, id: &str) -> Result<AuditLogEntry> {
        self.get(&["auditlog", id], RequestConfig::new()).await
    }

    // ========================================================================
    // Members and teams
    // ========================================================================

    pub async fn list_members(&self, request: PageRequest) -> Result<Page<Member>> {
        self.list(&["members"], &request).await
    }

    pub async fn get_member(&self, id: &str) -> Result<Member> {
        self.get(&["members", id], RequestConfig::new()).await
    }

    pub async fn list_teams(&self, request: PageRequest) -> Result<Page<Team>> {
        self.list(&["teams"], &request).await
    }

    /// Fetch one team; `expand` is forwarded when set
    pub async fn get_team(&self, key: &str, expand: Option<&str>) -> Result<Team> {
        self.get(&["teams", key], RequestConfig::new().query_opt("expand", expand))
            .await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn list<T: DeserializeOwned>(&self, segments: &[&str], request: &PageRequest) -> Result<Page<T>> {
        let url = self.endpoint(segments)?;
        self.http.get_json(url.as_str(), request.to_request_config()).await
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str], config: RequestConfig) -> Result<T> {
        let url = self.endpoint(segments)?;
        self.http.get_json(url.as_str(), config).await
    }

    /// Build `<base>/api/v2/<segments...>`, percent-encoding each segment
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("invalid base_url '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v2"])
            .extend(segments);
        Ok(url)
    }
}
