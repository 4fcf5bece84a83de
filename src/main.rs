use crate::api::ApiClient;
use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::{Request, Server};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod domain;
mod errors;
mod handlers;
mod query;
mod responses;
mod router;
mod session;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("villa_site=info")),
        )
        .init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ API client
    let backend = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ API client init failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;
    tracing::info!(api = %config.api_base_url, "Starting server at http://{addr}");
    let app = App::new(config, Box::new(backend));

    // 3️⃣ Serve requests, passing the app into the closure
    let server = Server::bind(&addr).max_workers(workers);
    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let start = Instant::now();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        };

        tracing::info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed = ?start.elapsed(),
            "request"
        );
        resp
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
