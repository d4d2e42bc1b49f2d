//! Diesel models for the project and conversation tables.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Database row for the projects table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub conversation_id: String,
    pub story: String,
    pub part_count: Option<i32>,
    pub parts: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for the projects table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProjectRow {
    pub id: Uuid,
    pub name: String,
    pub conversation_id: String,
    pub story: String,
    pub part_count: Option<i32>,
    pub parts: serde_json::Value,
}

/// Changeset written on every save; identity columns are never touched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectChangeset {
    pub story: String,
    pub part_count: Option<i32>,
    pub parts: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the conversation_messages table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::conversation_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    pub id: i64,
    pub conversation_id: String,
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for the conversation_messages table.
///
/// A `None` timestamp falls back to the column default (`clock_timestamp()`).
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::conversation_messages)]
pub struct NewMessageRow {
    pub conversation_id: String,
    pub role: String,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}
