use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use sqlx::{Pool, Postgres};
use tracing::error;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl HealthResponse {
    fn ok(status: &str, database: &str) -> HttpResponse {
        HttpResponse::Ok().json(HealthResponse {
            status: status.to_string(),
            database: database.to_string(),
            error: None,
        })
    }

    fn unavailable(status: &str, err: &sqlx::Error) -> HttpResponse {
        HttpResponse::ServiceUnavailable().json(HealthResponse {
            status: status.to_string(),
            database: "disconnected".to_string(),
            error: Some(format!("Database error: {}", err)),
        })
    }
}

async fn db_ping(pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_one(pool).await.map(|_| ())
}

/// General health check including database connectivity.
/// Use for load balancers and uptime monitors.
#[get("/health")]
async fn health_check(pool: web::Data<Pool<Postgres>>) -> impl Responder {
    match db_ping(pool.get_ref()).await {
        Ok(()) => HealthResponse::ok("healthy", "connected"),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            HealthResponse::unavailable("unhealthy", &e)
        }
    }
}

/// Readiness probe: is the service ready to accept traffic.
/// Returns 503 while the database is unavailable; recovers when it returns.
#[get("/ready")]
async fn readiness_check(pool: web::Data<Pool<Postgres>>) -> impl Responder {
    match db_ping(pool.get_ref()).await {
        Ok(()) => HealthResponse::ok("ready", "connected"),
        Err(e) => {
            error!("Readiness check failed: database unavailable: {:?}", e);
            HealthResponse::unavailable("not_ready", &e)
        }
    }
}

/// Liveness probe: process is alive, no dependency checks
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HealthResponse::ok("alive", "not_checked")
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};

    use super::*;

    #[actix_web::test]
    async fn liveness_probe_needs_no_dependencies() {
        let app = test::init_service(App::new().configure(health_config)).await;

        let req = test::TestRequest::get().uri("/live").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "alive");
        assert_eq!(body["database"], "not_checked");
    }
}
