//! `launchdarkly_team`

use super::row::{required_qual, RowBuilder};
use super::types::{Column, ColumnType, Table};
use crate::api::{ApiClient, Team};
use crate::engine::{QueryContext, RowEmitter, RowSink};
use crate::error::Result;
use crate::pagination::{paginate, LoopControl};
use crate::types::Row;
use async_trait::async_trait;

const COLUMNS: &[Column] = &[
    Column::new("name", ColumnType::String, "A human-friendly name for the team."),
    Column::new("key", ColumnType::String, "The team key."),
    Column::new("description", ColumnType::String, "A description of the team."),
    Column::new("access", ColumnType::Json, "The access levels designated to the team members."),
    Column::new("creation_date", ColumnType::Timestamp, "Creation date of the team."),
    Column::new("last_modified", ColumnType::Timestamp, "Last modified date of the team."),
    Column::new("links", ColumnType::Json, "The location and content type of related resources."),
    Column::new("roles", ColumnType::Json, "Custom roles assigned to the team."),
    Column::new(
        "idp_synced",
        ColumnType::Bool,
        "Whether the team has been synced with an external identity provider.",
    ),
    Column::new("members", ColumnType::Json, "Team member details."),
    Column::new("projects", ColumnType::Json, "Project details associated with the team."),
    Column::new("maintainers", ColumnType::Json, "Team maintainer details."),
    Column::new("version", ColumnType::Int, "The team version."),
    Column::new("filter", ColumnType::String, "A comma-separated list of filters."),
    Column::new(
        "expand",
        ColumnType::String,
        "A comma-separated list of properties that can reveal additional information in the response.",
    ),
    Column::new("title", ColumnType::String, "Title of the resource."),
];

/// Teams in the account
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamTable;

#[async_trait]
impl Table for TeamTable {
    fn name(&self) -> &'static str {
        "launchdarkly_team"
    }

    fn description(&self) -> &'static str {
        "Fetch a list of all teams."
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

        let mut emitter = RowEmitter::new(sink, |team: Team| {
            team_row(team, filter.as_deref(), expand.as_deref())
        });
        paginate(request, move |req| client.list_teams(req), &mut emitter).await
    }

    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row> {
        let key = required_qual(ctx, "key")?;
        let filter = ctx.quals.equals_string("filter");
        let expand = ctx.quals.equals_string("expand");

        let team = client.get_team(&key, expand.as_deref()).await?;
        Ok(team_row(team, filter.as_deref(), expand.as_deref()))
    }
}

fn team_row(team: Team, filter: Option<&str>, expand: Option<&str>) -> Row {
    RowBuilder::new()
        .string("name", team.name.as_deref())
        .string("key", Some(team.key.as_str()))
        .string("description", team.description.as_deref())
        .json("access", team.access)
        .timestamp("creation_date", team.creation_date)
        .timestamp("last_modified", team.last_modified)
        .json("links", team.links)
        .json("roles", team.roles)
        .value("idp_synced", team.idp_synced)
        .json("members", team.members)
        .json("projects", team.projects)
        .json("maintainers", team.maintainers)
        .value("version", team.version)
        .string("filter", filter)
        .string("expand", expand)
        .string("title", team.name.as_deref())
        .build()
}
