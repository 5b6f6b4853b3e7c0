use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};

mod app;
mod config;
mod domain;
mod errors;
mod locale;
mod logging;
mod notifications;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_logging();

    // 1️⃣ Read configuration and the room catalog
    let app = match AppConfig::from_env().and_then(App::from_config) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    let addr = app.config.addr;
    info!(
        %addr,
        rooms = app.catalog.rooms.len(),
        default_rate = app.catalog.default_rate,
        "Starting server"
    );

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    // 3️⃣ Serve requests, sharing the app by reference
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
