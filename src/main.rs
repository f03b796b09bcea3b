use axum::{
    error_handling::HandleErrorLayer,
    routing::{get, post},
    BoxError, Router,
};
use http::StatusCode;
use interview_question_bank::{
    config::{get_config, init_config},
    middleware::rate_limit::{new_rps_state, rps_middleware, session_rps_middleware},
    routes, AppState,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_IN_FLIGHT: usize = 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    init_config()?;
    let config = get_config();

    let app_state = AppState::from_config();
    info!(
        ttl_seconds = config.session_ttl_seconds,
        max_attempts = config.max_resample_attempts,
        adaptive = config.adaptive_difficulty,
        seeded = config.question_bank_seed.is_some(),
        "question bank ready"
    );

    {
        let state = app_state.clone();
        let interval = Duration::from_secs(config.session_sweep_interval_seconds.max(1));
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let evicted = state.question_bank.sweep();
                tracing::debug!(evicted, sessions = state.question_bank.session_count(), "session sweep");
            }
        });
    }

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let draw_api = Router::new()
        .route(
            "/api/sessions/:session_id/questions",
            post(routes::question_bank::next_question),
        )
        .layer(axum::middleware::from_fn_with_state(
            new_rps_state(config.session_rps),
            session_rps_middleware,
        ));

    let public_api = Router::new()
        .route(
            "/api/sessions/:session_id",
            axum::routing::delete(routes::question_bank::clear_session),
        )
        .route(
            "/api/sessions/:session_id/stats",
            get(routes::question_bank::session_stats),
        )
        .route(
            "/api/sessions/:session_id/count",
            get(routes::question_bank::question_count),
        )
        .route(
            "/api/sessions/:session_id/history",
            get(routes::question_bank::question_history),
        )
        .route(
            "/api/questions/validate",
            post(routes::question_bank::validate_question),
        )
        .route("/api/questions/id", post(routes::question_bank::question_id))
        .route("/api/capacity", get(routes::question_bank::capacity))
        .route("/api/metrics", get(routes::question_bank::metrics))
        .layer(axum::middleware::from_fn_with_state(
            new_rps_state(config.public_rps),
            rps_middleware,
        ));

    let app = base_routes
        .merge(draw_api)
        .merge(public_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(REQUEST_TIMEOUT)
                .concurrency_limit(MAX_IN_FLIGHT),
        );

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("interview_question_bank=info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {}", err),
        )
    }
}
