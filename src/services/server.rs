use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::store::Snapshot;

pub struct ServerService {
    port: u16,
    config: AppConfig,
    snapshot: Snapshot,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig, snapshot: Snapshot) -> Self {
        Self {
            port,
            config,
            snapshot,
        }
    }

    pub async fn run(self) -> Result<()> {
        let state = Arc::new(AppState {
            snapshot: self.snapshot,
            config: self.config,
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
