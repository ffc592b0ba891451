//! Web server for the board API.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::Database;

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server over the given database.
    pub fn new(config: &ServerConfig, db: Database) -> Self {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .expect("Invalid web server address");

        Self {
            addr,
            app_state: Arc::new(AppState::new(db)),
        }
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(self) -> axum::Router {
        create_router(self.app_state).merge(create_health_router())
    }

    /// Run the web server until the process exits.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self.addr;
        let router = self.build_router();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Web server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the bound address.
    ///
    /// Useful for tests binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let addr = self.addr;
        let router = self.build_router();

        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
        }
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let db = Database::open_in_memory().await.unwrap();
        let server = WebServer::new(&create_test_config(), db);
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let db = Database::open_in_memory().await.unwrap();
        let server = WebServer::new(&create_test_config(), db);
        let addr = server.run_with_addr().await.unwrap();
        assert_ne!(addr.port(), 0);
    }
}
