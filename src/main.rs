use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use creditline::config::Config;
use creditline::middleware::RequestId;
use creditline::modules::credits::controllers::credit_controller;
use creditline::modules::credits::repositories::{CreditRepository, SqlCreditRepository};
use creditline::modules::credits::services::CreditService;
use creditline::modules::customers::controllers::customer_controller;
use creditline::modules::customers::repositories::{CustomerRepository, SqlCustomerRepository};
use creditline::modules::customers::services::CustomerService;
use creditline::modules::health::controllers::health_controller;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creditline=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;
    config.validate().context("configuration validation failed")?;

    tracing::info!("Starting Creditline credit application backend");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Wire repositories and services
    let customer_repo: Arc<dyn CustomerRepository> =
        Arc::new(SqlCustomerRepository::new(db_pool.clone()));
    let credit_repo: Arc<dyn CreditRepository> = Arc::new(SqlCreditRepository::new(db_pool));

    let customer_service = Arc::new(CustomerService::new(customer_repo));
    let credit_service = Arc::new(
        CreditService::new(credit_repo, customer_service.clone())
            .with_window_months(config.app.first_installment_window_months),
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(credit_service.clone()))
            .app_data(web::Data::new(customer_service.clone()))
            .service(
                web::scope("/api")
                    .configure(credit_controller::configure)
                    .configure(customer_controller::configure),
            )
            .route("/health", web::get().to(health_controller::health_check))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;

    Ok(())
}
