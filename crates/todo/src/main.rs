mod app;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    app::create_app,
    config::{Config, StorageBackend, DEFAULT_BIND, DEFAULT_DB_PATH},
    state::AppState,
};

/// todo-api - JSON API for a todo list
#[derive(Parser, Debug)]
#[command(name = "todo-api")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, default_value = DEFAULT_DB_PATH, env = "TODO_DB")]
    db_path: String,

    /// Address to bind the JSON API to (`host:port`, or `:port` for all interfaces)
    #[arg(long, short, default_value = DEFAULT_BIND, env = "TODO_BIND_JSON")]
    bind: String,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = StorageBackend::Sqlite, env = "TODO_STORAGE")]
    storage: StorageBackend,

    /// Emit logs as JSON lines
    #[arg(long, env = "TODO_LOG_JSON")]
    log_json: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        Ok(Config::new(
            self.db_path,
            &self.bind,
            self.storage,
            self.log_json,
        )?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    init_tracing(config.log_json);

    // Opens the store and creates the schema; failure ends the process
    let state = AppState::new(&config).await?;

    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to the configured bind address
        None => TcpListener::bind(&config.bind_addr).await?,
    };

    tracing::info!("JSON API server listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber, as text or JSON lines.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "todo_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["todo-api"]).unwrap();

        assert_eq!(cli.storage, StorageBackend::Sqlite);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_cli_flags_build_config() {
        let cli = Cli::try_parse_from([
            "todo-api",
            "--db-path",
            "/tmp/todos.db",
            "--bind",
            ":9000",
            "--storage",
            "memory",
            "--log-json",
        ])
        .unwrap();

        let config = cli.into_config().unwrap();

        assert_eq!(config.db_path, "/tmp/todos.db");
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.log_json);
    }

    #[test]
    fn test_cli_rejects_unknown_storage() {
        assert!(Cli::try_parse_from(["todo-api", "--storage", "postgres"]).is_err());
    }

    #[test]
    fn test_cli_rejects_empty_bind() {
        let cli = Cli::try_parse_from(["todo-api", "--bind", ""]).unwrap();

        assert!(cli.into_config().is_err());
    }
}
