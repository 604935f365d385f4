use tokio::net::TcpListener;

use pairdiff_protocol::ApiDescription;
use pairdiff_sdk::Comparer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// The pairdiff HTTP service.
pub struct PairdiffServer {
    config: ServerConfig,
}

impl PairdiffServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handler state built from the config, fetching over HTTP.
    pub fn state(&self) -> ServerResult<AppState> {
        let comparer = Comparer::http(&self.config.fetch_config())?.with_scheme(&self.config.scheme);
        Ok(AppState::new(comparer, ApiDescription::for_site(&self.config.public_url))
            .allow_anonymous(self.config.allow_anonymous))
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        Ok(build_router(self.state()?))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("pairdiff listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
