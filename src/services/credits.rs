//! Crediting creators on publications, events and works.
//!
//! Each kind of record has its own role table with the same shape: a
//! creator, the record, a free-text role name and an order.

use crate::models::Credit;
use crate::services::creators::row_to_creator;
use crate::Database;
use anyhow::Result;

/// A role table and the column holding the credited record's id.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RoleTable {
    pub table: &'static str,
    pub target: &'static str,
}

pub(crate) const PUBLICATION_ROLES: RoleTable = RoleTable {
    table: "publication_roles",
    target: "publication_id",
};

pub(crate) const EVENT_ROLES: RoleTable = RoleTable {
    table: "event_roles",
    target: "event_id",
};

pub(crate) const WORK_ROLES: RoleTable = RoleTable {
    table: "work_roles",
    target: "work_id",
};

/// Insert a role, defaulting its order to one after the record's last
/// credit. Returns the new row id and the order used.
pub(crate) fn add(
    db: &Database,
    roles: RoleTable,
    target_id: i64,
    creator_id: i64,
    role_name: &str,
    role_order: Option<i32>,
) -> Result<(i64, i32)> {
    let conn = db.get()?;
    let role_order = match role_order {
        Some(order) => order,
        None => conn.query_row(
            &format!(
                "SELECT COALESCE(MAX(role_order), 0) + 1 FROM {} WHERE {} = ?",
                roles.table, roles.target
            ),
            [target_id],
            |row| row.get(0),
        )?,
    };

    conn.execute(
        &format!(
            "INSERT INTO {} (creator_id, {}, role_name, role_order) VALUES (?, ?, ?, ?)",
            roles.table, roles.target
        ),
        (creator_id, target_id, role_name, role_order),
    )?;

    Ok((conn.last_insert_rowid(), role_order))
}

/// The creators of a record, in credit order.
pub(crate) fn list(db: &Database, roles: RoleTable, target_id: i64) -> Result<Vec<Credit>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(&format!(
        r#"
        SELECT c.id, c.slug, c.name, c.name_sort, c.kind, c.created_at, c.updated_at,
               r.role_name, r.role_order
        FROM {} r
        JOIN creators c ON r.creator_id = c.id
        WHERE r.{} = ?
        ORDER BY r.role_order, r.role_name
        "#,
        roles.table, roles.target
    ))?;
    let credits = stmt
        .query_map([target_id], |row| {
            Ok(Credit {
                creator: row_to_creator(row)?,
                role_name: row.get(7)?,
                role_order: row.get(8)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(credits)
}

/// Remove every role `creator_id` has on a record.
pub(crate) fn remove(
    db: &Database,
    roles: RoleTable,
    target_id: i64,
    creator_id: i64,
) -> Result<bool> {
    let conn = db.get()?;
    let deleted = conn.execute(
        &format!(
            "DELETE FROM {} WHERE {} = ? AND creator_id = ?",
            roles.table, roles.target
        ),
        (target_id, creator_id),
    )?;
    Ok(deleted > 0)
}
