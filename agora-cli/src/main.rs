//! Terminal client for the Agora agent marketplace.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod account_commands;
mod catalog_commands;
mod cli;
mod commands;
mod publish_commands;
mod settings;

use cli::{Cli, Commands};
use commands::AppContext;
use settings::Settings;

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let settings =
        Settings::load(cli.config.as_deref())?.with_overrides(cli.gateway_url.clone(), cli.assistant_url.clone());
    debug!("Using gateway {}", settings.gateway_url);
    let ctx = AppContext::new(&settings)?;

    match cli.command {
        Commands::Login { email, password } => account_commands::login(&ctx, email, password).await,
        Commands::Logout => {
            account_commands::logout(&ctx);
            Ok(())
        },
        Commands::Whoami { json } => commands::handle_whoami(&ctx, json).await,
        Commands::Register(args) => account_commands::register(&ctx, args).await,
        Commands::Agents(cmd) => commands::handle_agent_command(&ctx, cmd).await,
        Commands::Contents(cmd) => commands::handle_content_command(&ctx, cmd).await,
        Commands::Comment(cmd) => commands::handle_comment_command(&ctx, cmd).await,
        Commands::Publish(args) => publish_commands::publish(&ctx, args).await,
        Commands::Ask { question } => commands::handle_ask(&ctx, &question).await,
    }
}
