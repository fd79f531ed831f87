use csp_violation_recorder::config::{self, Config};
use csp_violation_recorder::forwarder::{EventSink, SeqSink};
use csp_violation_recorder::{AppState, ingest};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "csp_violation_recorder=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = if Path::new("config.toml").exists() {
        config::load("config.toml")?
    } else {
        Config::default()
    };

    let sink: Arc<dyn EventSink> = Arc::new(SeqSink::new(&config.seq_url)?);
    let app = ingest::app(AppState { sink });

    let listener = tokio::net::TcpListener::bind((config.bind.as_str(), config.port)).await?;

    let service_url = format!("http://127.0.0.1:{}/", config.port);
    println!("CSP violation recorder listening at {service_url}");

    if config.open_browser {
        if let Err(err) = open::that(&service_url) {
            tracing::warn!("failed to open {service_url} in a browser: {err}");
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}
