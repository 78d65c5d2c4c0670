use sqlx::{Pool, Postgres};
use tracing::info;

use crate::api::job::models::JobStatus;
use crate::api::job::service::ServiceError;
use crate::api::job::{JobService, NewJob};

fn posting(
    title: &str,
    description: &str,
    company_name: &str,
    location: &str,
    salary: i32,
    status: JobStatus,
) -> NewJob {
    NewJob {
        title: title.to_string(),
        description: description.to_string(),
        company_name: company_name.to_string(),
        location: location.to_string(),
        salary,
        status: Some(status),
    }
}

/// Sample postings for local development, including one inactive listing
fn sample_jobs() -> Vec<NewJob> {
    vec![
        posting(
            "Full Stack Developer",
            "We are seeking a talented Full Stack Developer with expertise in Python/Django and React/Node.js to join our dynamic team.",
            "InnovateTech Solutions",
            "Nairobi, Kenya",
            180000,
            JobStatus::Active,
        ),
        posting(
            "Senior UI/UX Designer",
            "Join our creative team to craft intuitive and beautiful user interfaces for our next-gen products. Strong portfolio required.",
            "Creative Hub Africa",
            "Remote",
            120000,
            JobStatus::Active,
        ),
        posting(
            "Data Analyst Intern",
            "An exciting internship opportunity for aspiring data analysts. Learn from industry experts and work on real-world projects.",
            "Analytics Forward",
            "Meru, Kenya",
            30000,
            JobStatus::Active,
        ),
        posting(
            "Marketing Manager",
            "Lead our marketing strategies and campaigns to drive brand awareness and customer acquisition. Experience in digital marketing is a plus.",
            "Global Reach Marketing",
            "Kampala, Uganda",
            100000,
            JobStatus::Active,
        ),
        posting(
            "Customer Support Specialist",
            "Provide excellent customer service and technical support to our users. Strong communication skills are essential.",
            "UserCare Connect",
            "Kigali, Rwanda",
            50000,
            JobStatus::Active,
        ),
        posting(
            "Backend Developer (Inactive)",
            "This is an old listing for a backend developer role that is no longer active.",
            "Old Company Ltd.",
            "Mombasa, Kenya",
            100000,
            JobStatus::Inactive,
        ),
    ]
}

/// Replace the jobs table contents with the sample postings
pub async fn run(pool: Pool<Postgres>) -> Result<(), ServiceError> {
    let service = JobService::new(pool);

    info!("Deleting existing jobs...");
    let deleted = service.clear_jobs().await?;
    info!("{} existing jobs deleted", deleted);

    let created = service.bulk_create_jobs(&sample_jobs()).await?;
    info!("Successfully populated {} sample jobs", created);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn sample_data_passes_validation() {
        for job in sample_jobs() {
            assert!(job.validate().is_ok(), "invalid sample job: {}", job.title);
        }
    }

    #[test]
    fn sample_data_includes_one_inactive_listing() {
        let inactive = sample_jobs()
            .iter()
            .filter(|j| j.status == Some(JobStatus::Inactive))
            .count();
        assert_eq!(inactive, 1);
    }
}
