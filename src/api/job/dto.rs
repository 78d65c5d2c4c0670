use serde::Deserialize;
use validator::Validate;

use super::models::JobStatus;

/// Payload for updating a job posting
///
/// Every field is optional; omitted fields keep their stored value. The id
/// and timestamps are server-owned and not present here; client-supplied
/// values for them are ignored at the boundary.
#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateJob {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Company name must be between 1 and 255 characters"
    ))]
    pub company_name: Option<String>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: Option<String>,

    pub salary: Option<i32>,

    /// Supplying active here is the only way to bring an inactive posting back
    pub status: Option<JobStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_payload_deserializes() {
        let changes: UpdateJob =
            serde_json::from_value(json!({ "salary": 120000 })).unwrap();
        assert_eq!(changes.salary, Some(120000));
        assert!(changes.title.is_none());
        assert!(changes.status.is_none());
    }

    #[test]
    fn empty_payload_is_valid() {
        let changes: UpdateJob = serde_json::from_value(json!({})).unwrap();
        assert!(changes.validate().is_ok());
    }

    #[test]
    fn status_change_deserializes() {
        let changes: UpdateJob =
            serde_json::from_value(json!({ "status": "active" })).unwrap();
        assert_eq!(changes.status, Some(JobStatus::Active));
    }

    #[test]
    fn present_fields_are_validated() {
        let changes: UpdateJob =
            serde_json::from_value(json!({ "title": "x".repeat(256) })).unwrap();
        let errors = changes.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
