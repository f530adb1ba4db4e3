//! Schema creation without starting the server

use anyhow::{Context, Result};
use clap::Parser;
use clinicctl_server::db;

use crate::config::ClinicConfig;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the expenses and accountability tables if absent
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = match args.database_url {
        Some(url) => url,
        None => ClinicConfig::resolve()?.database.url,
    };

    let pool = db::create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;

    db::schema::run(&pool)
        .await
        .context("Failed to create schema")?;
    pool.close().await;

    println!("Schema ready: {database_url}");
    Ok(())
}
