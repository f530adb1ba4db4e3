//! HTTP server command
//!
//! Runs the clinic API: root status, expenses and accountability routes.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use clinicctl_server::{run_server, ServerConfig};

use crate::config::ClinicConfig;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "CLINICCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections (default: 5)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Only allow local frontend origins instead of every origin
    #[arg(long)]
    pub cors_localhost_only: bool,
}

impl ServeArgs {
    /// Overlay flags onto the resolved configuration.
    fn server_config(self, config: &ClinicConfig) -> ServerConfig {
        let mut server = config.to_server_config();
        if let Some(bind) = self.bind {
            server.bind_addr = bind;
        }
        if let Some(url) = self.database_url {
            server.database_url = url;
        }
        if let Some(max) = self.max_connections {
            server.max_connections = max;
        }
        if self.cors_localhost_only {
            server.cors_permissive = false;
        }
        server
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ClinicConfig::resolve()?;
    let server = args.server_config(&config);

    tracing::info!("Starting clinicctl server on {}", server.bind_addr);

    // Run server (blocks until shutdown)
    run_server(server).await.context("Server error")?;

    Ok(())
}
