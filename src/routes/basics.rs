use actix_web::{web, HttpResponse, Responder};

use crate::models::{HealthResponse, WelcomeResponse};
use crate::routes::AppState;

/// Configure the fixed-payload routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/hello", web::get().to(hello))
        .route("/health", web::get().to(health_check));
}

/// GET /
async fn home(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: state.basics.welcome_message.clone(),
    })
}

/// GET /hello, plain text
async fn hello(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(state.basics.hello_message.clone())
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        rules: state.responder.rules().len(),
    })
}
