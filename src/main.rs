use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use safebite_api::RestApi;
use safebite_catalog::CatalogStore;

/// An allergen-aware food product recommender
#[derive(Parser, Debug)]
#[command(name = "safebite")]
#[command(about = "Recommends the best-matching allergen-safe food product", long_about = None)]
struct Args {
    /// Path to the product catalog JSON file
    #[arg(short, long, default_value = "products.json")]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting safebite v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog source: {:?}", args.catalog);
    info!("HTTP API port: {}", args.http_port);

    // A missing or malformed catalog never aborts startup; the store comes
    // up degraded and logs the cause once.
    let store = Arc::new(CatalogStore::open(&args.catalog));
    info!(
        "Catalog store initialized: {} products{}",
        store.product_count(),
        if store.is_degraded() { " (degraded)" } else { "" }
    );

    info!("HTTP API: http://localhost:{}/", args.http_port);
    RestApi::start(store, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
