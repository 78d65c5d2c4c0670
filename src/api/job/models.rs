use serde::{Deserialize, Serialize};
use validator::Validate;

/// Visibility state of a job posting
///
/// Inactive postings are hidden from the default listing but stay
/// retrievable and updatable by id.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Inactive,
}

impl JobStatus {
    /// Value stored in the jobs.status column
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Inactive => "inactive",
        }
    }
}

/// Payload for creating a job posting
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct NewJob {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Company name must be between 1 and 255 characters"
    ))]
    pub company_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: String,

    pub salary: i32,

    /// None when the client omitted the field entirely
    pub status: Option<JobStatus>,
}

impl NewJob {
    /// Status to persist: a posting created without an explicit status goes
    /// live immediately. A supplied status is honored as given, including
    /// inactive.
    pub fn status_or_default(&self) -> JobStatus {
        self.status.unwrap_or(JobStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> serde_json::Value {
        json!({
            "title": "QA Engineer",
            "description": "Own the test strategy for our hiring platform.",
            "company_name": "Acme",
            "location": "Remote",
            "salary": 90000
        })
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(JobStatus::Active).unwrap(), "active");
        assert_eq!(serde_json::to_value(JobStatus::Inactive).unwrap(), "inactive");
    }

    #[test]
    fn omitted_status_defaults_to_active() {
        let job: NewJob = serde_json::from_value(valid_payload()).unwrap();
        assert!(job.status.is_none());
        assert_eq!(job.status_or_default(), JobStatus::Active);
    }

    #[test]
    fn supplied_status_is_honored() {
        let mut payload = valid_payload();
        payload["status"] = json!("inactive");
        let job: NewJob = serde_json::from_value(payload).unwrap();
        assert_eq!(job.status, Some(JobStatus::Inactive));
        assert_eq!(job.status_or_default(), JobStatus::Inactive);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut payload = valid_payload();
        payload["status"] = json!("archived");
        assert!(serde_json::from_value::<NewJob>(payload).is_err());
    }

    #[test]
    fn valid_payload_passes_validation() {
        let job: NewJob = serde_json::from_value(valid_payload()).unwrap();
        assert!(job.validate().is_ok());
    }

    #[test]
    fn overlong_title_fails_validation() {
        let mut payload = valid_payload();
        payload["title"] = json!("x".repeat(256));
        let job: NewJob = serde_json::from_value(payload).unwrap();
        let errors = job.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn empty_required_fields_fail_validation() {
        let mut payload = valid_payload();
        payload["company_name"] = json!("");
        payload["location"] = json!("");
        let job: NewJob = serde_json::from_value(payload).unwrap();
        let errors = job.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company_name"));
        assert!(errors.field_errors().contains_key("location"));
    }
}
