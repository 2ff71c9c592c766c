//! `launchdarkly_audit_log`
//!
//! Supports server-side filtering: a `date` range becomes the `after` and
//! `before` parameters, `spec` is a resource specifier and `query` is sent
//! as the free-text `q` parameter.

use super::row::{required_qual, RowBuilder};
use super::types::{Column, ColumnType, Table};
use crate::api::{ApiClient, AuditLogEntry};
use crate::engine::{QueryContext, RowEmitter, RowSink};
use crate::error::Result;
use crate::filter::TimeRange;
use crate::pagination::{paginate, LoopControl, PageRequest};
use crate::types::Row;
use async_trait::async_trait;

const COLUMNS: &[Column] = &[
    Column::new("name", ColumnType::String, "The name of the resource this audit log entry refers to."),
    Column::new("id", ColumnType::String, "The ID of the audit log entry."),
    Column::new(
        "short_description",
        ColumnType::String,
        "Shorter version of the change recorded in the audit log entry.",
    ),
    Column::new("account_id", ColumnType::String, "A unique identifier of the account."),
    Column::new("description", ColumnType::String, "Description of the change recorded in the audit log entry."),
    Column::new("date", ColumnType::Timestamp, "Date of the audit log entry."),
    Column::new(
        "accesses",
        ColumnType::Json,
        "Details on the actions performed and resources acted on in this audit log entry.",
    ),
    Column::new("kind", ColumnType::String, "Type of resource."),
    Column::new("comment", ColumnType::String, "Optional comment for the audit log entry."),
    Column::new("subject", ColumnType::Json, "Subject of the audit log entry."),
    Column::new("member", ColumnType::Json, "Summary of the member like email, first name, last name etc."),
    Column::new("token", ColumnType::Json, "Access token data representation."),
    Column::new("app", ColumnType::Json, "Authorized app data representation."),
    Column::new("title_verb", ColumnType::String, "The action and resource recorded in this audit log entry."),
    Column::new(
        "audit_log_title",
        ColumnType::String,
        "A description of what occurred, in the format 'member' 'titleVerb' 'target'.",
    ),
    Column::new("target", ColumnType::Json, "Target resource representation."),
    Column::new("parent", ColumnType::Json, "Parent resource representation."),
    Column::new("spec", ColumnType::String, "A resource specifier used to filter entries."),
    Column::new("query", ColumnType::String, "Free-text search used to filter entries."),
    Column::new("title", ColumnType::String, "Title of the resource."),
];

/// Account audit log
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditLogTable;

#[async_trait]
impl Table for AuditLogTable {
    fn name(&self) -> &'static str {
        "launchdarkly_audit_log"
    }

    fn description(&self) -> &'static str {
        "Fetch a list of all audit log entries."
    }

    fn columns(&self) -> &'static [Column] {
        COLUMNS
    }

    fn list_quals(&self) -> &'static [&'static str] {
        &["date", "spec", "query"]
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
        let spec = ctx.quals.equals_string("spec");
        let query = ctx.quals.equals_string("query");
        let request = list_request(ctx)?;

        let mut emitter = RowEmitter::new(sink, |entry: AuditLogEntry| {
            audit_log_row(entry, spec.as_deref(), query.as_deref())
        });
        paginate(request, move |req| client.list_audit_log(req), &mut emitter).await
    }

    async fn get(&self, client: &ApiClient, ctx: &QueryContext) -> Result<Row> {
        let id = required_qual(ctx, "id")?;
        let entry = client.get_audit_log_entry(&id).await?;
        Ok(audit_log_row(entry, None, None))
    }
}

/// First page request with the filter quals translated to parameters
pub(crate) fn list_request(ctx: &QueryContext) -> Result<PageRequest> {
    let range = TimeRange::from_quals(&ctx.quals, "date")?;
    let mut request = ctx
        .page_request()
        .with_param_opt("spec", ctx.quals.equals_string("spec"))
        .with_param_opt("q", ctx.quals.equals_string("query"));

    for (key, value) in range.to_params() {
        request = request.with_param(key, value);
    }
    Ok(request)
}

fn audit_log_row(entry: AuditLogEntry, spec: Option<&str>, query: Option<&str>) -> Row {
    RowBuilder::new()
        .string("name", entry.name.as_deref())
        .string("id", Some(entry.id.as_str()))
        .string("short_description", entry.short_description.as_deref())
        .string("account_id", entry.account_id.as_deref())
        .string("description", entry.description.as_deref())
        .timestamp("date", entry.date)
        .json("accesses", entry.accesses)
        .string("kind", entry.kind.as_deref())
        .string("comment", entry.comment.as_deref())
        .json("subject", entry.subject)
        .json("member", entry.member)
        .json("token", entry.token)
        .json("app", entry.app)
        .string("title_verb", entry.title_verb.as_deref())
        .string("audit_log_title", entry.title.as_deref())
        .json("target", entry.target)
        .json("parent", entry.parent)
        .string("spec", spec)
        .string("query", query)
        .string("title", entry.name.as_deref())
        .build()
}
