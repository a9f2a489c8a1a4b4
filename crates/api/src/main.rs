//! Customer Segmentation Pipeline - Main Entry Point

use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!(
        "=== Customer Segmentation Pipeline v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    let settings = Settings::load()?;
    run_server(settings).await
}
