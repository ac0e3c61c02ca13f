// src/server/routes.rs - ACTIX-WEB ROUTES

use super::backend::HealthBackend;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health/", web::get().to(health_check));
}

/// Health Check Endpoint
pub async fn health_check(backend: web::Data<HealthBackend>) -> ActixResult<HttpResponse> {
    if !backend.is_healthy() {
        return Ok(HttpResponse::InternalServerError().json(json!({ "status": "unhealthy" })));
    }
    Ok(HttpResponse::Ok().json(backend.payload()))
}
