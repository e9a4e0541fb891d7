use actix_web::{web, App, HttpServer};
use anyhow::Context;
use payroll::config::{Config, DatabaseConfig};
use payroll::middleware::RequestId;
use payroll::modules::{self, AppServices};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("payroll={},actix_web=info", config.app.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting payroll service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    DatabaseConfig::migrate(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    let services = AppServices::mysql(&db_pool);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .configure(|cfg| services.register(cfg))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
