use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::customers::models::{CustomerView, RegisterCustomerRequest, UpdateCustomerRequest};
use crate::modules::customers::services::CustomerService;

/// Query parameter carrying the target customer id
#[derive(Debug, Deserialize)]
pub struct CustomerIdQuery {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
}

/// Register a new customer
/// POST /api/customers
pub async fn register_customer(
    service: web::Data<Arc<CustomerService>>,
    request: web::Json<RegisterCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let view = service.save(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(view))
}

/// Get a customer by id
/// GET /api/customers/{id}
pub async fn get_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let customer = service.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CustomerView::from_customer(&customer)))
}

/// Partially update a customer
/// PATCH /api/customers?customerId=
pub async fn update_customer(
    service: web::Data<Arc<CustomerService>>,
    query: web::Query<CustomerIdQuery>,
    request: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let view = service
        .update(query.customer_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(view))
}

/// Delete a customer
/// DELETE /api/customers/{id}
pub async fn delete_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::post().to(register_customer))
            .route("", web::patch().to(update_customer))
            .route("/{id}", web::get().to(get_customer))
            .route("/{id}", web::delete().to(delete_customer)),
    );
}
