mod app;
mod config;
mod error;
mod gallery;
mod logging;
mod paginator;
mod routes;

use anyhow::Result;

use gallery::GalleryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting gallery backend"
    );

    // Seed the in-memory gallery
    let gallery = GalleryStore::seeded(settings.gallery_seed_count);
    tracing::info!(images = gallery.len(), "Gallery seeded");

    // Create application state
    let state = app::AppState::new(settings.clone(), gallery);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
