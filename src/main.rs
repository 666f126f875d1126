use std::path::Path;

use anyhow::Context;

use neo_filter::app;
use neo_filter::data::loader;
use neo_filter::state::AppState;

/// Fixed relative path of the dataset, read once at startup.
const DATA_PATH: &str = "nasa.csv";

/// Default local bind address.
const BIND_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = loader::load_file(Path::new(DATA_PATH))
        .with_context(|| format!("loading dataset from {DATA_PATH}"))?;
    log::info!(
        "Loaded {} rows with columns {:?}",
        dataset.len(),
        dataset.column_names
    );

    let app = app::router(AppState::new(dataset));
    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .with_context(|| format!("binding {BIND_ADDR}"))?;
    log::info!("Listening on http://{BIND_ADDR}");
    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}
