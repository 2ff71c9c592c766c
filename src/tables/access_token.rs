//! `launchdarkly_access_token`

use super::row::{required_qual, RowBuilder};
use super::types::{Column, ColumnType, Table};
use crate::api::{AccessToken, ApiClient};
use crate::engine::{QueryContext, RowEmitter, RowSink};
use crate::error::Result;
use crate::pagination::{paginate, LoopControl};
use crate::types::Row;
use async_trait::async_trait;

const COLUMNS: &[Column] = &[
    Column::new("name", ColumnType::String, "The name of the access token."),
    Column::new("id", ColumnType::String, "A unique identifier of the access token."),
    Column::new("owner_id", ColumnType::String, "A unique identifier of the owner of the organization."),
    Column::new("member_id", ColumnType::String, "A unique identifier of the member of the organization."),
    Column::new("description", ColumnType::String, "A description for the access token."),
    Column::new("creation_date", ColumnType::Timestamp, "Creation date of the access token."),
    Column::new("last_modified", ColumnType::Timestamp, "Last modified date of the access token."),
    Column::new("role", ColumnType::String, "Built-in role for the token."),
    Column::new(
        "token",
        ColumnType::String,
        "The token value. Outside of creation or reset, contains the last four characters.",
    ),
    Column::new("service_token", ColumnType::Bool, "Whether this is a service token or a personal token."),
    Column::new("default_api_version", ColumnType::Int, "The default API version for this token."),
    Column::new("last_used", ColumnType::Timestamp, "Date and time when the access token was last used."),
    Column::new("member", ColumnType::Json, "Summary of the member like email, first name, last name etc."),
    Column::new(
        "custom_role_ids",
        ColumnType::Json,
        "A list of custom role IDs to use as access limits for the access token.",
    ),
    Column::new(
        "inline_role",
        ColumnType::Json,
        "Policy statements that may be used in place of a built-in or custom role.",
    ),
    Column::new("links", ColumnType::Json, "The location and content type of related resources."),
    Column::new("title", ColumnType::String, "Title of the resource."),
];

/// API access tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessTokenTable;

#[async_trait]
impl Table for AccessTokenTable {
    fn name(&self) -> &'static str {
        "launchdarkly_access_token"
    }

    fn description(&self) -> &'static str {
        "Fetch a list of all access tokens."
    }

    fn columns(&self) -> &'static [Column] {
        COLUMNS
    }

    fn get_keys(&self) -> &'static [&'static str] {
        &["id"]
    }

    async fn list(
        &self,
        client: &ApiClient,
        ctx: &QueryContext,
        sink: &mut dyn RowSink,
    ) -> Result<LoopControl> {
        let mut emitter = RowEmitter::new(sink, token_row);
        paginate(ctx.page_request(), move |req| client.list_tokens(req), &mut emitter).await
    }

    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row> {
        let id = required_qual(ctx, "id")?;
        client.get_token(&id).await.map(token_row)
    }
}

fn token_row(token: AccessToken) -> Row {
    RowBuilder::new()
        .string("name", token.name.as_deref())
        .string("id", Some(token.id.as_str()))
        .string("owner_id", token.owner_id.as_deref())
        .string("member_id", token.member_id.as_deref())
        .string("description", token.description.as_deref())
        .timestamp("creation_date", token.creation_date)
        .timestamp("last_modified", token.last_modified)
        .string("role", token.role.as_deref())
        .string("token", token.token.as_deref())
        .value("service_token", token.service_token)
        .value("default_api_version", token.default_api_version)
        .timestamp("last_used", token.last_used)
        .json("member", token.member)
        .json("custom_role_ids", token.custom_role_ids)
        .json("inline_role", token.inline_role)
        .json("links", token.links)
        .string("title", token.name.as_deref())
        .build()
}
