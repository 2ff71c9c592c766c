//! Table definitions
//!
//! Each table is a thin declaration over one endpoint: its columns, the
//! equality quals it forwards as request parameters, the key columns that
//! select the single-item path, and the list/get operations themselves.

mod access_token;
mod account_member;
mod audit_log;
mod environment;
mod feature_flag;
mod project;
mod row;
mod team;
mod types;

pub use access_token::AccessTokenTable;
pub use account_member::AccountMemberTable;
pub use audit_log::AuditLogTable;
pub use environment::EnvironmentTable;
pub use feature_flag::FeatureFlagTable;
pub use project::ProjectTable;
pub use team::TeamTable;
pub use row::{ms_to_rfc3339, RowBuilder};
pub use types::{Column, ColumnType, Table, TableRegistry};
