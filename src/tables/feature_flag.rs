//! `launchdarkly_feature_flag`

use super::row::{required_qual, RowBuilder};
use super::types::{Column, ColumnType, Table};
use crate::api::{ApiClient, FeatureFlag};
use crate::engine::{QueryContext, RowEmitter, RowSink};
use crate::error::Result;
use crate::pagination::{paginate, LoopControl, PageRequest};
use crate::partition::{fan_out, Scoped};
use crate::types::Row;
use async_trait::async_trait;

const COLUMNS: &[Column] = &[
    Column::new("name", ColumnType::String, "A human-friendly name for the feature flag."),
    Column::new("key", ColumnType::String, "A unique key used to reference the flag in your code."),
    Column::new("kind", ColumnType::String, "Kind of feature flag."),
    Column::new("description", ColumnType::String, "Description of the feature flag."),
    Column::new("version", ColumnType::Int, "Version of the feature flag."),
    Column::new("creation_date", ColumnType::Timestamp, "Time when the feature flag was created."),
    Column::new(
        "include_in_snippet",
        ColumnType::Bool,
        "Deprecated, use client_side_availability. Whether this flag is available to the client-side JavaScript SDK.",
    ),
    Column::new("temporary", ColumnType::Bool, "Whether the flag is a temporary flag."),
    Column::new("maintainer_id", ColumnType::String, "Associated maintainer ID for the feature flag."),
    Column::new(
        "maintainer_team_key",
        ColumnType::String,
        "The key of the associated team that maintains this feature flag.",
    ),
    Column::new("archived", ColumnType::Bool, "Whether the feature flag is archived."),
    Column::new("archived_date", ColumnType::Timestamp, "Time when the feature flag was archived."),
    Column::new("project_key", ColumnType::String, "The key of the project this flag belongs to."),
    Column::new("variations", ColumnType::Json, "An array of possible variations for the flag."),
    Column::new("tags", ColumnType::Json, "Tags for the feature flag."),
    Column::new("tag", ColumnType::String, "Tag used to filter the flag list."),
    Column::new("links", ColumnType::Json, "The location and content type of related resources."),
    Column::new("maintainer", ColumnType::Json, "Details of the maintainer of the feature flag."),
    Column::new("goal_ids", ColumnType::Json, "An array of goal IDs."),
    Column::new("experiments", ColumnType::Json, "Experiments related to the feature flag."),
    Column::new("custom_properties", ColumnType::Json, "Custom properties of the feature flag."),
    Column::new(
        "defaults",
        ColumnType::Json,
        "Variation indexes served by default when targeting is on or off.",
    ),
    Column::new("environments", ColumnType::Json, "Configuration of the flag in each environment."),
    Column::new(
        "client_side_availability",
        ColumnType::Json,
        "Which client-side SDKs can use the flag.",
    ),
    Column::new("title", ColumnType::String, "Title of the resource."),
];

/// Feature flags of every project
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureFlagTable;

#[async_trait]
impl Table for FeatureFlagTable {
    fn name(&self) -> &'static str {
        "launchdarkly_feature_flag"
    }

    fn description(&self) -> &'static str {
        "Fetch a list of all feature flags."
    }

    fn columns(&self) -> &'static [Column] {
        COLUMNS
    }

    fn list_quals(&self) -> &'static [&'static str] {
        &["project_key", "tag"]
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
        let tag = ctx.quals.equals_string("tag");
        let request = ctx.page_request().with_param_opt("tag", tag.as_deref());

        if let Some(project_key) = ctx.quals.equals_string("project_key") {
            let mut emitter = RowEmitter::new(sink, |flag: FeatureFlag| {
                flag_row(flag, &project_key, tag.as_deref())
            });
            return paginate(
                request,
                |req| client.list_flags(&project_key, req),
                &mut emitter,
            )
            .await;
        }

        let mut emitter = RowEmitter::new(sink, |scoped: Scoped<FeatureFlag>| {
            flag_row(scoped.item, &scoped.parent_key, tag.as_deref())
        });
        fan_out(
            PageRequest::default(),
            move |req| client.list_projects(req),
            request,
            move |project_key: String, req: PageRequest| async move {
                client.list_flags(&project_key, req).await
            },
            &mut emitter,
        )
        .await
    }

    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row> {
        let project_key = required_qual(ctx, "project_key")?;
        let key = required_qual(ctx, "key")?;

        let tag = ctx.quals.equals_string("tag");

        let flag = client.get_flag(&project_key, &key).await?;
        Ok(flag_row(flag, &project_key, tag.as_deref()))
    }
}

pub(crate) fn flag_row(flag: FeatureFlag, project_key: &str, tag: Option<&str>) -> Row {
    RowBuilder::new()
        .string("name", flag.name.as_deref())
        .string("key", Some(flag.key.as_str()))
        .string("kind", flag.kind.as_deref())
        .string("description", flag.description.as_deref())
        .value("version", flag.version)
        .timestamp("creation_date", flag.creation_date)
        .value("include_in_snippet", flag.include_in_snippet)
        .value("temporary", flag.temporary)
        .string("maintainer_id", flag.maintainer_id.as_deref())
        .string("maintainer_team_key", flag.maintainer_team_key.as_deref())
        .value("archived", flag.archived)
        .timestamp("archived_date", flag.archived_date)
        .string("project_key", Some(project_key))
        .json("variations", flag.variations)
        .value("tags", flag.tags)
        .string("tag", tag)
        .json("links", flag.links)
        .json("maintainer", flag.maintainer)
        .json("goal_ids", flag.goal_ids)
        .json("experiments", flag.experiments)
        .json("custom_properties", flag.custom_properties)
        .json("defaults", flag.defaults)
        .json("environments", flag.environments)
        .json("client_side_availability", flag.client_side_availability)
        .string("title", flag.name.as_deref())
        .build()
}
