//! Column definitions for the team members table.

use core_types::Member;

use crate::{Column, SortKey};

/// Id of the column holding row action buttons.
pub const ACTIONS_COLUMN: &str = "actions";

/// Columns of the team members table, in display order.
pub fn member_columns() -> Vec<Column<Member>> {
    vec![
        Column::sortable("name", "Name", |m: &Member| SortKey::text(&m.name)),
        Column::sortable("status", "Status", |m: &Member| SortKey::text(m.status.as_str())),
        Column::sortable("role", "Role", |m: &Member| SortKey::text(&m.role)),
        Column::sortable("email", "Email address", |m: &Member| SortKey::text(&m.email)),
        // Teams sort by how many teams a member is on in total
        Column::sortable("teams", "Teams", |m: &Member| {
            SortKey::Number(m.teams.len() as i64 + i64::from(m.extra_teams))
        }),
        Column::display(ACTIONS_COLUMN, "Actions"),
    ]
}
