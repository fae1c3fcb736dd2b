use std::io::{BufRead, Write};

use agora_client::{AuthService, AuthState, FileStore, GatewayClient, SessionManager};
use agora_types::protocol::ChatMessage;
use agora_types::User;
use anyhow::{Context, Result};
use colored::Colorize;
use futures::StreamExt;

use crate::cli::{AgentCommands, CommentCommands, ContentCommands};
use crate::settings::Settings;

mod account_commands_impl {
    pub use crate::account_commands::*;
}
mod catalog_commands_impl {
    pub use crate::catalog_commands::*;
}

/// Gateway client plus auth service backed by the session file.
pub struct AppContext {
    pub client: GatewayClient,
    pub auth: AuthService,
}

impl AppContext {
    pub fn new(settings: &Settings) -> Result<Self> {
        let store = match &settings.session_file {
            Some(path) => FileStore::new(path),
            None => FileStore::default_location().context("Cannot locate the config directory")?,
        };
        let client = GatewayClient::new(settings.client_config(), SessionManager::new(store))
            .context("Failed to create the gateway client")?;
        let auth = AuthService::new(client.clone());
        Ok(Self { client, auth })
    }

    /// Signed-in user, resolved from the stored token.
    pub async fn require_user(&self) -> Result<User> {
        match self.auth.restore().await {
            AuthState::Authenticated(user) => Ok(user),
            _ => anyhow::bail!("Not signed in. Run `agora login` first."),
        }
    }
}

/// Password from the flag, else one line from stdin.
pub fn read_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).context("Failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub async fn handle_agent_command(ctx: &AppContext, cmd: AgentCommands) -> Result<()> {
    match cmd {
        AgentCommands::List { search, category, mine, json } => {
            catalog_commands_impl::list_agents(ctx, search.as_deref(), category.as_deref(), mine, json).await
        },
        AgentCommands::Show { id, json } => catalog_commands_impl::show_agent(ctx, &id, json).await,
    }
}

pub async fn handle_content_command(ctx: &AppContext, cmd: ContentCommands) -> Result<()> {
    match cmd {
        ContentCommands::List { kind, json } => catalog_commands_impl::list_contents(ctx, kind, json).await,
        ContentCommands::Show { id, json } => catalog_commands_impl::show_content(ctx, &id, json).await,
    }
}

pub async fn handle_comment_command(ctx: &AppContext, cmd: CommentCommands) -> Result<()> {
    ctx.require_user().await?;
    match cmd {
        CommentCommands::Agent { id, text } => catalog_commands_impl::comment_agent(ctx, &id, &text.join(" ")).await,
        CommentCommands::Content { id, text } => {
            catalog_commands_impl::comment_content(ctx, &id, &text.join(" ")).await
        },
    }
}

pub async fn handle_whoami(ctx: &AppContext, json: bool) -> Result<()> {
    account_commands_impl::whoami(ctx, json).await
}

/// Print the assistant reply as it arrives.
pub async fn handle_ask(ctx: &AppContext, question: &[String]) -> Result<()> {
    let messages = [ChatMessage::user(question.join(" "))];
    let mut reply = ctx.client.ask(&messages).await.context("Assistant request failed")?;

    let mut stdout = std::io::stdout();
    let mut received = false;
    while let Some(chunk) = reply.next().await {
        let chunk = chunk.context("Assistant stream interrupted")?;
        received |= !chunk.is_empty();
        write!(stdout, "{}", chunk)?;
        stdout.flush()?;
    }
    if received {
        writeln!(stdout)?;
    } else {
        println!("{}", "The assistant sent an empty reply.".yellow());
    }
    Ok(())
}
