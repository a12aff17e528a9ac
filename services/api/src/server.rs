use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore};
use crate::routes::with_posting_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use hiring_desk::config::AppConfig;
use hiring_desk::error::AppError;
use hiring_desk::telemetry;
use hiring_desk::workflows::posting::PostingSessionService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // Each session restamps `opened_on`; this date only seeds the defaults.
    let defaults = config
        .posting
        .wizard_settings(Local::now().date_naive());
    let store = Arc::new(InMemorySessionStore::with_idle_limit(
        config.server.session_idle_limit(),
    ));
    let posting_service = Arc::new(PostingSessionService::new(store, defaults));

    let app = with_posting_routes(posting_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        company = %config.posting.company_name,
        enforce_posting_window = config.posting.enforce_posting_window,
        session_idle_minutes = config.server.session_idle_minutes,
        "hiring desk ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
