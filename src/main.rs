use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod config;
mod db;
mod shutdown;

use crate::api::{
    health::health_config,
    home::home_config,
    job::{JobService, handlers::job_config},
    validation,
};
use crate::cli::{Cli, Command};
use crate::shutdown::ShutdownCoordinator;

/// Console output plus daily-rotating file logs under `log_dir`
/// (info.log.<date> and error.log.<date>), filtered by RUST_LOG.
fn init_tracing(log_dir: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(log_dir, "info.log");
    let error_file = tracing_appender::rolling::daily(log_dir, "error.log");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(info_file)
                .with_ansi(false)
                .with_filter(LevelFilter::INFO),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(error_file)
                .with_ansi(false)
                .with_filter(LevelFilter::ERROR),
        )
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Cli::parse();

    let config::Config {
        database_url,
        max_payload_size,
        max_db_connections,
        log_dir,
    } = config::Config::from_env().expect("Failed to load configuration");

    std::fs::create_dir_all(&log_dir).expect("Failed to create logs directory");
    init_tracing(&log_dir);

    let pool = db::connection::get_connection(&database_url, max_db_connections)
        .await
        .expect("Failed to connect to database");
    info!("Database connection pool established");

    // Schema is applied before anything touches the jobs table
    db::migrations::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Some(Command::Seed) = args.command {
        db::seed::run(pool.clone())
            .await
            .expect("Failed to seed sample jobs");
        pool.close().await;
        return Ok(());
    }

    info!(
        "Starting job-board (payload limit {} bytes, pool size {})",
        max_payload_size, max_db_connections
    );

    // Clone pool for the HTTP server; the original is kept for shutdown
    let server_pool = pool.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_pool.clone())) // health probes ping through the raw pool
            .app_data(web::Data::new(JobService::new(server_pool.clone())))
            .app_data(web::PayloadConfig::default().limit(max_payload_size))
            .app_data(validation::json_config())
            .configure(home_config)
            .configure(health_config)
            .configure(job_config)
    });

    info!("Server starting on http://127.0.0.1:8080");
    let server = server.bind(("127.0.0.1", 8080))?.run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, pool)
        .wait_for_shutdown()
        .await
}
