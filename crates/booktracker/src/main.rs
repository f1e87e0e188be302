mod app;
mod attachments;
mod config;
mod context;
mod handlers;
mod identity;
mod lambda;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Booktracker - Track your reading list and attach files to each book
#[derive(Parser, Debug)]
#[command(name = "booktracker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    #[command(flatten)]
    config: Config,
}

/// Set by the Lambda runtime in every function sandbox.
const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let on_lambda = std::env::var_os(LAMBDA_RUNTIME_ENV).is_some();

    init_tracing(on_lambda);

    let state = build_state(&cli.config).await;
    let app = create_app(state);

    tracing::info!(
        table = %cli.config.books_table,
        index = %cli.config.books_user_index,
        bucket = %cli.config.attachment_bucket,
        lambda = on_lambda,
        "Starting booktracker"
    );

    if on_lambda {
        let service = ServiceBuilder::new()
            .map_request(lambda::strip_stage_prefix)
            .service(app);

        return lambda_http::run(service)
            .await
            .map_err(|e| anyhow::anyhow!(e));
    }

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// CloudWatch gets one JSON object per line; local runs get the pretty format.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "booktracker=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .without_time(),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[cfg(feature = "inmemory")]
async fn build_state(config: &Config) -> AppState {
    tracing::warn!("Using in-memory storage; records are lost on restart");
    AppState::in_memory(config)
}

#[cfg(feature = "dynamodb")]
async fn build_state(config: &Config) -> AppState {
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    AppState::from_aws(config, &sdk_config)
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
