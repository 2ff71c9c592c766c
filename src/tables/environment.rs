//! `launchdarkly_environment`

use super::row::{required_qual, RowBuilder};
use super::types::{Column, ColumnType, Table};
use crate::api::{ApiClient, Environment};
use crate::engine::{QueryContext, RowEmitter, RowSink};
use crate::error::Result;
use crate::pagination::{paginate, LoopControl, PageRequest};
use crate::partition::{fan_out, Scoped};
use crate::types::Row;
use async_trait::async_trait;

const COLUMNS: &[Column] = &[
    Column::new("id", ColumnType::String, "ID of the environment."),
    Column::new("key", ColumnType::String, "A project-unique key for the environment."),
    Column::new("name", ColumnType::String, "A human-friendly name for the environment."),
    Column::new("api_key", ColumnType::String, "API key to use with client-side SDKs."),
    Column::new("mobile_key", ColumnType::String, "API key to use with mobile SDKs."),
    Column::new("color", ColumnType::String, "The color used to indicate this environment in the UI."),
    Column::new(
        "default_ttl",
        ColumnType::Int,
        "The default time (in minutes) that the PHP SDK can cache feature flag rules locally.",
    ),
    Column::new(
        "secure_mode",
        ColumnType::Bool,
        "Ensures that one end user of the client-side SDK cannot inspect the variations for another end user.",
    ),
    Column::new(
        "default_track_events",
        ColumnType::Bool,
        "Enables tracking detailed information for new flags by default.",
    ),
    Column::new(
        "require_comments",
        ColumnType::Bool,
        "Whether members who modify flags and segments through the UI are required to add a comment.",
    ),
    Column::new(
        "confirm_changes",
        ColumnType::Bool,
        "Whether members who modify flags and segments through the UI are required to confirm those changes.",
    ),
    Column::new("project_key", ColumnType::String, "The key of the project this environment belongs to."),
    Column::new("links", ColumnType::Json, "Links to other resources within the API."),
    Column::new("tags", ColumnType::Json, "A list of tags for this environment."),
    Column::new("approval_settings", ColumnType::Json, "The approval settings of the environment."),
    Column::new("title", ColumnType::String, "Title of the resource."),
];

/// Environments of every project
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentTable;

#[async_trait]
impl Table for EnvironmentTable {
    fn name(&self) -> &'static str {
        "launchdarkly_environment"
    }

    fn description(&self) -> &'static str {
        "Fetch a list of all environments."
    }

    fn columns(&self) -> &'static [Column] {
        COLUMNS
    }

    fn list_quals(&self) -> &'static [&'static str] {
        &["project_key"]
    }

    fn get_keys(&self) -> &'static [&'static str] {
        &["project_key", "key"]
    }

    async fn list(
        &self,
        client: &ApiClient,
        ctx: &QueryContext,
        sink: &mut dyn RowSink,
    ) -> Result<LoopControl> {
        // A pinned project skips the project listing.
        if let Some(project_key) = ctx.quals.equals_string("project_key") {
            let mut emitter =
                RowEmitter::new(sink, |env: Environment| environment_row(env, &project_key));
            return paginate(
                ctx.page_request(),
                |req| client.list_environments(&project_key, req),
                &mut emitter,
            )
            .await;
        }

        let mut emitter = RowEmitter::new(sink, |scoped: Scoped<Environment>| {
            environment_row(scoped.item, &scoped.parent_key)
        });

        fan_out(
            PageRequest::default(),
            move |req| client.list_projects(req),
            ctx.page_request(),
            move |project_key: String, req: PageRequest| async move {
                client.list_environments(&project_key, req).await
            },
            &mut emitter,
        )
        .await
    }

    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row> {
        let project_key = required_qual(ctx, "project_key")?;
        let key = required_qual(ctx, "key")?;

        let environment = client.get_environment(&project_key, &key).await?;
        Ok(environment_row(environment, &project_key))
    }
}

pub(crate) fn environment_row(env: Environment, project_key: &str) -> Row {
    RowBuilder::new()
        .string("id", env.id.as_deref())
        .string("key", Some(env.key.as_str()))
        .string("name", env.name.as_deref())
        .string("api_key", env.api_key.as_deref())
        .string("mobile_key", env.mobile_key.as_deref())
        .string("color", env.color.as_deref())
        .value("default_ttl", env.default_ttl)
        .value("secure_mode", env.secure_mode)
        .value("default_track_events", env.default_track_events)
        .value("require_comments", env.require_comments)
        .value("confirm_changes", env.confirm_changes)
        .string("project_key", Some(project_key))
        .json("links", env.links)
        .value("tags", env.tags)
        .json("approval_settings", env.approval_settings)
        .string("title", env.name.as_deref())
        .build()
}
