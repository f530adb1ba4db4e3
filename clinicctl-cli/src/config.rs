//! Layered configuration for clinicctl
//!
//! Precedence, lowest first: built-in defaults, `~/.clinicctl/config.toml`
//! (or `$CLINICCTL_CONFIG`), environment (including `.env` files), CLI flags.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clinicctl_server::ServerConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "CLINICCTL_CONFIG";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const BIND_ENV: &str = "CLINICCTL_BIND";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_localhost_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for ServerSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            bind: defaults.bind_addr,
            cors_localhost_only: !defaults.cors_permissive,
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            url: defaults.database_url,
            max_connections: defaults.max_connections,
        }
    }
}

impl ClinicConfig {
    /// Config file path: `$CLINICCTL_CONFIG` or `~/.clinicctl/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".clinicctl/config.toml")
    }

    /// Load the config file (if any) and apply environment overrides.
    pub fn resolve() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load config from a TOML file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))
    }

    /// Apply environment overrides using the given lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }
        if let Some(bind) = lookup(BIND_ENV) {
            self.server.bind = bind
                .parse()
                .with_context(|| format!("{BIND_ENV} is not a socket address: {bind}"))?;
        }
        Ok(())
    }

    pub fn to_server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.server.bind,
            database_url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            cors_permissive: !self.server.cors_localhost_only,
        }
    }
}

/// Load `.env` from the current directory, then `~/.clinicctl/.env`.
///
/// Existing variables are never overwritten. Returns the files that were
/// loaded so they can be logged once tracing is up.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(home_dir) = dirs::home_dir() {
        let env_file = home_dir.join(".clinicctl").join(".env");
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", ClinicConfig::config_path().display());
        }
        ConfigCommands::Show => {
            let config = ClinicConfig::resolve()?;
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{rendered}");
        }
    }
    Ok(())
}
