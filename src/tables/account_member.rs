//! `launchdarkly_account_member`

use super::row::{required_qual, RowBuilder};
use super::types::{Column, ColumnType, Table};
use crate::api::{ApiClient, Member};
use crate::engine::{QueryContext, RowEmitter, RowSink};
use crate::error::Result;
use crate::pagination::{paginate, LoopControl};
use crate::types::Row;
use async_trait::async_trait;

const COLUMNS: &[Column] = &[
    Column::new("id", ColumnType::String, "The member's ID."),
    Column::new("first_name", ColumnType::String, "First name."),
    Column::new("last_name", ColumnType::String, "Last name."),
    Column::new(
        "role",
        ColumnType::String,
        "The member's built-in role. If the member has no custom roles, this role is in effect.",
    ),
    Column::new("email", ColumnType::String, "The member's email address."),
    Column::new("verified", ColumnType::Bool, "Whether the member's email address has been verified."),
    Column::new("pending_invite", ColumnType::Bool, "Whether the member has a pending invitation."),
    Column::new(
        "pending_email",
        ColumnType::String,
        "The member's email address before it has been verified.",
    ),
    Column::new("custom_roles", ColumnType::Json, "The set of custom roles (as keys) assigned to the member."),
    Column::new("mfa", ColumnType::String, "Whether multi-factor authentication is enabled for this member."),
    Column::new(
        "exclude_dashboards",
        ColumnType::Json,
        "Default dashboards that the member has chosen to ignore.",
    ),
    Column::new("last_seen", ColumnType::Timestamp, "Last seen timestamp of the member."),
    Column::new("teams", ColumnType::Json, "Details on the teams this member is assigned to."),
    Column::new("permission_grants", ColumnType::Json, "A list of permission grants."),
    Column::new("creation_date", ColumnType::Timestamp, "Time when the member was created."),
    Column::new("title", ColumnType::String, "Title of the resource."),
];

/// Members of the account
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountMemberTable;

#[async_trait]
impl Table for AccountMemberTable {
    fn name(&self) -> &'static str {
        "launchdarkly_account_member"
    }

    fn description(&self) -> &'static str {
        "Fetch a list of all account members."
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
        let mut emitter = RowEmitter::new(sink, member_row);
        paginate(ctx.page_request(), move |req| client.list_members(req), &mut emitter).await
    }

    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row> {
        let id = required_qual(ctx, "id")?;
        client.get_member(&id).await.map(member_row)
    }
}

fn member_row(member: Member) -> Row {
    // Members have no display name; the title is the member ID.
    RowBuilder::new()
        .string("id", Some(member.id.as_str()))
        .string("first_name", member.first_name.as_deref())
        .string("last_name", member.last_name.as_deref())
        .string("role", member.role.as_deref())
        .string("email", member.email.as_deref())
        .value("verified", member.verified)
        .value("pending_invite", member.pending_invite)
        .string("pending_email", member.pending_email.as_deref())
        .json("custom_roles", member.custom_roles)
        .string("mfa", member.mfa.as_deref())
        .json("exclude_dashboards", member.excluded_dashboards)
        .timestamp("last_seen", member.last_seen)
        .json("teams", member.teams)
        .json("permission_grants", member.permission_grants)
        .timestamp("creation_date", member.creation_date)
        .string("title", Some(member.id.as_str()))
        .build()
}
