use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::engines::pricing::{FeaturePointTable, PricingEngine};
use crate::engines::scoring::ScoringEngine;
use crate::error::AppError;
use crate::routes::{app_router, AppState, EngineContext};
use crate::telemetry;

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
    let engines = EngineContext {
        pricing: Arc::new(PricingEngine::new(
            FeaturePointTable::standard(),
            config.marketplace.service_fee_rate,
        )),
        scoring: Arc::new(ScoringEngine::new()),
    };

    let app = app_router()
        .layer(Extension(app_state))
        .layer(Extension(engines))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "marketplace engine service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
