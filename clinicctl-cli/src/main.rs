//! clinicctl CLI - clinic record-keeping service
//!
//! Entry point for the clinic backend:
//! - HTTP API for expenses and staff accountability (`serve` subcommand)
//! - Schema creation (`migrate` subcommand)
//! - Configuration inspection (`config` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "clinicctl",
    author,
    version,
    about = "Record-keeping backend for a family clinic: expenses and staff accountability"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server (creates tables on startup)
    Serve(commands::serve::ServeArgs),
    /// Create database tables if they do not exist, then exit
    Migrate(commands::migrate::MigrateArgs),
    /// Inspect clinicctl configuration (path, show)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so clap `env` fallbacks see .env values
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();
    if env_files.is_empty() {
        debug!("No .env files found (current dir or ~/.clinicctl)");
    } else {
        for path in &env_files {
            info!("Loaded environment from {}", path.display());
        }
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Config(args) => config::run_config(args)?,
        Commands::Completions(args) => run_completions(args),
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
