use actix_web::HttpResponse;

/// Liveness probe
/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "creditline"
    }))
}
