use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use fieldtrack::adapters::http::{
    attendance_router, cors_layer, performance_router, AttendanceAppState, PerformanceAppState,
};
use fieldtrack::adapters::postgres::{
    PostgresActivityRepository, PostgresAttendanceRepository, PostgresEmployeeDirectory,
    PostgresPayrollCalendar, PostgresPerformanceLogRepository, PostgresProjectRepository,
    PostgresTaskRepository,
};
use fieldtrack::config::AppConfig;

const DEFAULT_LOG_FILTER: &str = "info,fieldtrack=debug,sqlx=warn";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Tracing comes up before configuration so load failures are logged
    // through the same subscriber as everything else.
    init_tracing();

    let config = AppConfig::load()?;
    config.validate()?;

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let performance_state = PerformanceAppState {
        performance_log_repository: Arc::new(PostgresPerformanceLogRepository::new(pool.clone())),
        activity_repository: Arc::new(PostgresActivityRepository::new(pool.clone())),
        task_repository: Arc::new(PostgresTaskRepository::new(pool.clone())),
        project_repository: Arc::new(PostgresProjectRepository::new(pool.clone())),
    };
    let attendance_state = AttendanceAppState {
        payroll_calendar: Arc::new(PostgresPayrollCalendar::new(pool.clone())),
        employee_directory: Arc::new(PostgresEmployeeDirectory::new(pool.clone())),
        attendance_repository: Arc::new(PostgresAttendanceRepository::new(pool)),
    };

    let app = Router::new()
        .nest("/api/performance-logs", performance_router(performance_state))
        .nest("/api/payroll-periods", attendance_router(attendance_state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server.cors_origins_list()));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "fieldtrack started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
