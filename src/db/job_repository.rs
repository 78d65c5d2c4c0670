use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::job::dto::UpdateJob;
use crate::api::job::models::{JobStatus, NewJob};
use crate::db::models::JobRow;

const RETURNING: &str =
    "id, title, description, company_name, location, salary, status, created_at, updated_at";

/// Repository for job database operations
pub struct JobRepository;

impl JobRepository {
    /// Insert a new job and return the full row
    ///
    /// The status is resolved by the caller; the column default is never
    /// relied on.
    pub async fn create(
        pool: &Pool<Postgres>,
        job: &NewJob,
        status: JobStatus,
    ) -> Result<JobRow, sqlx::Error> {
        debug!("Creating job: title={}, status={}", job.title, status.as_str());

        let sql = format!(
            "INSERT INTO jobs (title, description, company_name, location, salary, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {RETURNING}"
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.company_name)
            .bind(&job.location)
            .bind(job.salary)
            .bind(status.as_str())
            .fetch_one(pool)
            .await?;

        debug!("Job created with id={}", row.id);
        Ok(row)
    }

    /// All active jobs, newest first
    pub async fn list_active(pool: &Pool<Postgres>) -> Result<Vec<JobRow>, sqlx::Error> {
        let sql = format!(
            "SELECT {RETURNING} FROM jobs WHERE status = 'active' ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, JobRow>(&sql).fetch_all(pool).await
    }

    /// Fetch a job by id regardless of status
    pub async fn find_by_id(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<JobRow>, sqlx::Error> {
        let sql = format!("SELECT {RETURNING} FROM jobs WHERE id = $1");

        sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to a job and return the updated row
    ///
    /// Only the fields present in `changes` are written; updated_at is
    /// refreshed on every call. Returns None when no row has that id.
    pub async fn update(
        pool: &Pool<Postgres>,
        id: i32,
        changes: &UpdateJob,
    ) -> Result<Option<JobRow>, sqlx::Error> {
        let sql = Self::build_update_sql(changes);
        debug!("Updating job id={}", id);

        let mut query = sqlx::query_as::<_, JobRow>(&sql).bind(id);

        if let Some(title) = &changes.title {
            query = query.bind(title);
        }
        if let Some(description) = &changes.description {
            query = query.bind(description);
        }
        if let Some(company_name) = &changes.company_name {
            query = query.bind(company_name);
        }
        if let Some(location) = &changes.location {
            query = query.bind(location);
        }
        if let Some(salary) = changes.salary {
            query = query.bind(salary);
        }
        if let Some(status) = changes.status {
            query = query.bind(status.as_str());
        }

        query.fetch_optional(pool).await
    }

    /// Build the UPDATE statement for the fields present in `changes`.
    /// $1 is always the row id; value placeholders follow field order.
    fn build_update_sql(changes: &UpdateJob) -> String {
        let mut sql = String::from("UPDATE jobs SET updated_at = NOW()");
        let mut param = 1;

        let mut push = |column: &str, present: bool| {
            if present {
                param += 1;
                sql.push_str(&format!(", {column} = ${param}"));
            }
        };

        push("title", changes.title.is_some());
        push("description", changes.description.is_some());
        push("company_name", changes.company_name.is_some());
        push("location", changes.location.is_some());
        push("salary", changes.salary.is_some());
        push("status", changes.status.is_some());

        sql.push_str(&format!(" WHERE id = $1 RETURNING {RETURNING}"));
        sql
    }

    /// Soft delete: mark a job inactive and refresh updated_at
    ///
    /// Unconditional, so a second call on the same id succeeds and leaves
    /// the row inactive. Returns None when no row has that id.
    pub async fn deactivate(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<JobRow>, sqlx::Error> {
        debug!("Deactivating job id={}", id);

        let sql = format!(
            "UPDATE jobs SET status = 'inactive', updated_at = NOW() \
             WHERE id = $1 RETURNING {RETURNING}"
        );

        sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Remove every job row. Only the seeding path uses this; the public
    /// API has no hard delete.
    pub async fn delete_all(pool: &Pool<Postgres>) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Bulk insert multiple jobs in a single statement
    /// Returns the number of rows inserted
    pub async fn bulk_create(
        pool: &Pool<Postgres>,
        jobs: &[NewJob],
    ) -> Result<u64, sqlx::Error> {
        if jobs.is_empty() {
            debug!("Bulk create called with empty job list");
            return Ok(0);
        }

        debug!("Starting bulk insert of {} jobs", jobs.len());

        let mut sql = String::from(
            "INSERT INTO jobs (title, description, company_name, location, salary, status) VALUES ",
        );
        for i in 0..jobs.len() {
            if i > 0 {
                sql.push_str(", ");
            }
            let base = i * 6;
            sql.push_str(&format!(
                "(${}, ${}, ${}, ${}, ${}, ${})",
                base + 1,
                base + 2,
                base + 3,
                base + 4,
                base + 5,
                base + 6
            ));
        }

        let mut query = sqlx::query(&sql);
        for job in jobs {
            query = query
                .bind(&job.title)
                .bind(&job.description)
                .bind(&job.company_name)
                .bind(&job.location)
                .bind(job.salary)
                .bind(job.status_or_default().as_str());
        }

        let result = query.execute(pool).await?;
        let rows_affected = result.rows_affected();
        debug!("Bulk insert completed: {} rows inserted", rows_affected);

        Ok(rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_sql_includes_only_present_fields() {
        let changes = UpdateJob {
            title: Some("Platform Engineer".to_string()),
            salary: Some(95000),
            ..UpdateJob::default()
        };
        let sql = JobRepository::build_update_sql(&changes);
        assert_eq!(
            sql,
            format!(
                "UPDATE jobs SET updated_at = NOW(), title = $2, salary = $3 \
                 WHERE id = $1 RETURNING {RETURNING}"
            )
        );
    }

    #[test]
    fn update_sql_with_no_fields_still_touches_updated_at() {
        let sql = JobRepository::build_update_sql(&UpdateJob::default());
        assert_eq!(
            sql,
            format!("UPDATE jobs SET updated_at = NOW() WHERE id = $1 RETURNING {RETURNING}")
        );
    }

    #[test]
    fn update_sql_covers_every_mutable_field() {
        let changes = UpdateJob {
            title: Some("t".to_string()),
            description: Some("d".to_string()),
            company_name: Some("c".to_string()),
            location: Some("l".to_string()),
            salary: Some(1),
            status: Some(JobStatus::Active),
        };
        let sql = JobRepository::build_update_sql(&changes);
        assert!(sql.contains("title = $2"));
        assert!(sql.contains("description = $3"));
        assert!(sql.contains("company_name = $4"));
        assert!(sql.contains("location = $5"));
        assert!(sql.contains("salary = $6"));
        assert!(sql.contains("status = $7"));
    }
}
