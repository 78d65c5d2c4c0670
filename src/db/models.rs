use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Database representation of a job posting with all fields.
///
/// This is also the public JSON shape: rows are serialized field-for-field
/// in API responses. `id`, `created_at` and `updated_at` are owned by the
/// server; request payloads never carry them.
#[derive(Debug, FromRow, Serialize)]
pub struct JobRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub salary: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
