use anyhow::{Context, Result};
use axum::serve;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use store_hub::core::config::Config;
use store_hub::core::state::AppState;
use store_hub::core::{routes, tracing_init};
use store_hub::security::rate_limiter::RateLimiter;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'. \
            If this is your first time running the server, copy config.example.toml to config.toml and adjust the values.",
            config_path.display()
        ))?;

    // Initialize tracing/logging
    tracing_init::init_tracing(&config.logging);

    // Build Tokio runtime with configured number of threads
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    // Run the async main function
    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = config.server.port,
        num_threads = config.server.num_threads,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Store Hub API starting"
    );

    // Create application state
    let state = Arc::new(AppState::new(config.clone()));

    // Spawn background task pruning stale rate-limit keys
    spawn_cleanup_task(
        Arc::clone(&state.rate_limiter),
        config.rate_limit.cleanup_interval,
    );

    info!(
        cleanup_interval_seconds = config.rate_limit.cleanup_interval,
        max_attempts = config.rate_limit.max_attempts,
        window_ms = config.rate_limit.window_ms,
        "Rate limiter cleanup task started"
    );

    // Build the router with middleware
    let app = routes::build_router(Arc::clone(&state)).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    );

    let addr = format!("0.0.0.0:{}", config.server.port);
    info!(address = %addr, "Starting TCP listener");

    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(address = %addr, "TCP listener bound successfully");

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutting down gracefully");

    Ok(())
}

fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Spawn a background task that periodically drops rate-limit keys whose
/// attempts have all aged out of the window
fn spawn_cleanup_task(rate_limiter: Arc<RateLimiter>, cleanup_interval: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(cleanup_interval));

        loop {
            interval.tick().await;

            debug!("Running rate limiter cleanup");
            let removed = rate_limiter.cleanup_stale(unix_millis());

            if removed > 0 {
                info!(
                    removed_keys = removed,
                    tracked_keys = rate_limiter.len(),
                    "Rate limiter cleanup completed"
                );
            } else {
                debug!("Rate limiter cleanup completed, no stale keys found");
            }
        }
    });
}

/// Resolves once the process is asked to stop (Ctrl+C, or SIGTERM on unix)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Ctrl+C handler must install");
    };

    #[cfg(unix)]
    let sigterm = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler must install")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, starting graceful shutdown"),
        _ = sigterm => info!("SIGTERM received, starting graceful shutdown"),
    }
}
