use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use room_server::catalog::Catalog;
use room_server::web::{AppState, create_router};

/// Directory of vector files used when ROOM_DATA_DIR is not set.
const DEFAULT_DATA_DIR: &str = "ready_data";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Locate the vector files
    let data_dir = std::env::var("ROOM_DATA_DIR").unwrap_or_else(|_| {
        eprintln!("Warning: ROOM_DATA_DIR not set. Using ./{DEFAULT_DATA_DIR}.");
        DEFAULT_DATA_DIR.to_string()
    });

    // Load the catalog (fail fast if unavailable)
    println!("Loading vacancy catalog from {data_dir}...");
    let catalog = Catalog::load_dir(Path::new(&data_dir)).expect("Failed to load vacancy catalog");
    println!(
        "Loaded {} vacancies across {} areas ({} records and {} files skipped)",
        catalog.len(),
        catalog.areas().len(),
        catalog.skipped_records(),
        catalog.skipped_files(),
    );

    // Build app state and router
    let state = AppState::new(catalog);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Room Availability Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health - Health check");
    println!("  GET  /areas  - Loaded areas and vacancy counts");
    println!("  POST /plan   - Plan room changes for a slot range");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
