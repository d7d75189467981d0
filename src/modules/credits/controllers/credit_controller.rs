use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::credits::models::ApplyCreditRequest;
use crate::modules::credits::services::CreditService;

/// Query parameter identifying the requesting customer
#[derive(Debug, Deserialize)]
pub struct CustomerIdQuery {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
}

/// Apply for a new credit
/// POST /api/credits
pub async fn apply_for_credit(
    service: web::Data<Arc<CreditService>>,
    request: web::Json<ApplyCreditRequest>,
) -> Result<HttpResponse, AppError> {
    let credit = request.into_inner().to_entity()?;
    let view = service.save(credit).await?;

    Ok(HttpResponse::Created().json(view))
}

/// List the requesting customer's credits
/// GET /api/credits?customerId=
pub async fn list_credits(
    service: web::Data<Arc<CreditService>>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let summaries = service.find_all_by_customer(query.customer_id).await?;

    Ok(HttpResponse::Ok().json(summaries))
}

/// Get one credit by its public code
/// GET /api/credits/{creditCode}?customerId=
pub async fn get_credit(
    service: web::Data<Arc<CreditService>>,
    path: web::Path<Uuid>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let view = service
        .find_by_credit_code(query.customer_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(view))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/credits")
            .route("", web::post().to(apply_for_credit))
            .route("", web::get().to(list_credits))
            .route("/{credit_code}", web::get().to(get_credit)),
    );
}
