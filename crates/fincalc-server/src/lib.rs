//! # FinCalc Server
//!
//! JSON HTTP API for the FinCalc calculators.
//!
//! ## Endpoints
//!
//! - `GET /health` - liveness and version
//! - `GET /calculators` - calculator catalogue with parameter descriptions
//! - `POST /calculate/:calculator` - run a calculator on a JSON object of parameters
//! - `POST /calculate/emi/schedule` - month-by-month loan repayment schedule
//!
//! ## Usage
//!
//! ```ignore
//! use fincalc_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::{ConfigError, ServerConfig};

/// The FinCalc server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let router = routes::create_router().layer(TraceLayer::new_for_http());

        if self.config.cors_enabled {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(self.config.host, self.config.port);

        info!("Starting FinCalc server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
