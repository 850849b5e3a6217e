use std::sync::Arc;

use anyhow::Context;
use product_ms::infrastructure::config::{Config, StorageBackend, StorageConfig};
use product_ms::infrastructure::logger::Logger;
use product_ms::infrastructure::store::{MemoryStore, ProductStore};
use product_ms::{create_routes, AppState, Product};
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref()).context("failed to load configuration")?;

    Logger::init(&config.logging.level);

    let store = build_store(&config.storage).await?;
    let state = AppState::new(store, config.validation.price_rule);
    let app = create_routes(state, config.http.timeout());

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("🚀 Product service running on http://{}", listener.local_addr()?);
    info!("   storage backend: {:?}", config.storage.backend);
    info!("   price rule: {}", config.validation.price_rule);
    info!("📖 API endpoints:");
    info!("   GET    /products          - List products");
    info!("   GET    /products/search   - Filter by q, min_price, max_price");
    info!("   GET    /products/:id      - Get product");
    info!("   POST   /products          - Create product");
    info!("   PUT    /products/:id      - Update product");
    info!("   DELETE /products/:id      - Delete product");
    info!("   GET    /health            - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Product service stopped");
    Ok(())
}

async fn build_store(config: &StorageConfig) -> anyhow::Result<Arc<dyn ProductStore>> {
    match config.backend {
        StorageBackend::Memory => {
            let store = if config.seed {
                MemoryStore::with_products(sample_products())
            } else {
                MemoryStore::new()
            };
            info!("✅ Memory store ready with {} products", store.len().await);
            Ok(Arc::new(store))
        }
        #[cfg(feature = "database")]
        StorageBackend::Postgres => {
            let store = product_ms::infrastructure::database::PgStore::connect(config)
                .await
                .context("failed to initialize postgres store")?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "database"))]
        StorageBackend::Postgres => {
            anyhow::bail!("postgres backend requires the `database` feature")
        }
    }
}

fn sample_products() -> Vec<Product> {
    [
        ("Keyboard", "Mechanical keyboard", 120),
        ("Mouse", "Wireless mouse", 40),
        ("Monitor", "27 inch monitor", 300),
    ]
    .into_iter()
    .map(|(name, description, price)| Product {
        id: String::new(),
        name: name.to_string(),
        description: description.to_string(),
        price: Some(Decimal::from(price)),
    })
    .collect()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
