use anyhow::Result;
use std::path::Path;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error};

use crate::config::{initialize_app_state, Settings};
use crate::router::create_router;

pub async fn serve(config_file: Option<&Path>, bind_address: Option<String>) -> Result<()> {
    trace!("Entering serve function");
    info!("DebtDesk application starting up");

    // Load configuration
    trace!("Loading settings");
    let mut settings = match Settings::load(config_file) {
        Ok(settings) => {
            debug!("Settings loaded successfully");
            settings
        }
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return Err(e);
        }
    };
    if let Some(bind_address) = bind_address {
        debug!("Bind address overridden on the command line");
        settings.bind_address = bind_address;
    }
    let bind_address = settings.bind_address.clone();
    debug!("Bind address: {}", bind_address);

    // Initialize application state
    trace!("Initializing application state");
    let state = initialize_app_state(settings);

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("DebtDesk API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
