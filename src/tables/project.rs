//! `launchdarkly_project`

use super::row::{required_qual, RowBuilder};
use super::types::{Column, ColumnType, Table};
use crate::api::{ApiClient, Project};
use crate::engine::{QueryContext, RowEmitter, RowSink};
use crate::error::Result;
use crate::pagination::{paginate, LoopControl};
use crate::types::Row;
use async_trait::async_trait;

const COLUMNS: &[Column] = &[
    Column::new("links", ColumnType::Json, "The location and content type of related resources."),
    Column::new("id", ColumnType::String, "The unique identifier of this project."),
    Column::new("key", ColumnType::String, "The key of this project."),
    Column::new(
        "include_in_snippet_by_default",
        ColumnType::Bool,
        "Whether flags created in this project are made available to the client-side JavaScript SDK by default.",
    ),
    Column::new(
        "default_client_side_availability",
        ColumnType::Json,
        "A set of boolean values which represent the client side availability.",
    ),
    Column::new("name", ColumnType::String, "A friendly name for the project."),
    Column::new("tags", ColumnType::Json, "A list of tags for the project."),
    Column::new("environments", ColumnType::Json, "Environments of the project, present when expanded."),
    Column::new("filter", ColumnType::String, "A comma-separated list of filters."),
    Column::new(
        "expand",
        ColumnType::String,
        "A comma-separated list of properties that can reveal additional information in the response.",
    ),
    Column::new("title", ColumnType::String, "Title of the resource."),
];

/// Projects in the account
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectTable;

#[async_trait]
impl Table for ProjectTable {
    fn name(&self) -> &'static str {
        "launchdarkly_project"
    }

    fn description(&self) -> &'static str {
        "Fetch a list of all projects."
    }

    fn columns(&self) -> &'static [Column] {
        COLUMNS
    }

    fn list_quals(&self) -> &'static [&'static str] {
        &["filter", "expand"]
    }

    fn get_keys(&self) -> &'static [&'static str] {
        &["key"]
    }

    async fn list(
        &self,
        client: &ApiClient,
        ctx: &QueryContext,
        sink: &mut dyn RowSink,
    ) -> Result<LoopControl> {
        let filter = ctx.quals.equals_string("filter");
        let expand = ctx.quals.equals_string("expand");
        let request = ctx
            .page_request()
            .with_param_opt("filter", filter.as_deref())
            .with_param_opt("expand", expand.as_deref());

        let mut emitter = RowEmitter::new(sink, |project: Project| {
            project_row(project, filter.as_deref(), expand.as_deref())
        });
        paginate(request, move |req| client.list_projects(req), &mut emitter).await
    }

    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row> {
        let key = required_qual(ctx, "key")?;
        let filter = ctx.quals.equals_string("filter");
        let expand = ctx.quals.equals_string("expand");

        let project = client.get_project(&key, expand.as_deref()).await?;
        Ok(project_row(project, filter.as_deref(), expand.as_deref()))
    }
}

pub(crate) fn project_row(project: Project, filter: Option<&str>, expand: Option<&str>) -> Row {
    RowBuilder::new()
        .json("links", project.links)
        .string("id", project.id.as_deref())
        .string("key", Some(project.key.as_str()))
        .value(
            "include_in_snippet_by_default",
            project.include_in_snippet_by_default,
        )
        .json(
            "default_client_side_availability",
            project.default_client_side_availability,
        )
        .string("name", project.name.as_deref())
        .value("tags", project.tags)
        .json("environments", project.environments)
        .string("filter", filter)
        .string("expand", expand)
        .string("title", project.name.as_deref())
        .build()
}
