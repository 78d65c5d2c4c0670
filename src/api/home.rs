use actix_web::{HttpResponse, Responder, get, web};

/// Root informational endpoint: plain-text liveness banner
#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().body("Job Listing Management Backend is Running")
}

pub fn home_config(config: &mut web::ServiceConfig) {
    config.service(home);
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};

    use super::*;

    #[actix_web::test]
    async fn root_returns_plain_text_banner() {
        let app = test::init_service(App::new().configure(home_config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "Job Listing Management Backend is Running");
    }
}
