use anyhow::Context as _;
use clap::Parser;
use svgg_core::{LimitsConfig, ServerConfig, SvggConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// svgg — a stateless pastebin for SVG images.
#[derive(Debug, Parser)]
#[command(name = "svgg", version, about)]
struct Args {
    /// Listening IP
    #[arg(long, env = "SVGG_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Listening port
    #[arg(long, env = "SVGG_PORT", default_value_t = 4444)]
    port: u16,

    /// Largest accepted SVG document, in bytes
    #[arg(long, env = "SVGG_MAX_PAYLOAD_BYTES", default_value_t = LimitsConfig::default().max_payload_bytes)]
    max_payload_bytes: usize,

    /// Ignore X-Forwarded-Proto when building links
    #[arg(long, env = "SVGG_NO_TRUST_FORWARDED_PROTO")]
    no_trust_forwarded_proto: bool,
}

impl From<Args> for SvggConfig {
    fn from(args: Args) -> Self {
        SvggConfig {
            server: ServerConfig {
                host: args.host,
                port: args.port,
                trust_forwarded_proto: !args.no_trust_forwarded_proto,
            },
            limits: LimitsConfig {
                max_payload_bytes: args.max_payload_bytes,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SvggConfig::from(Args::parse());
    let addr = config.server.addr();
    let app = svgg_server::app(config).context("failed to compile templates")?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("server starts, service is available at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
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
    info!("shutdown signal received");
}
