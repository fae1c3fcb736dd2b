use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "agora",
    about = "Terminal client for the Agora AI agent marketplace",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: $CONFIG_DIR/agora/config.toml)
    #[arg(long, env = "AGORA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Gateway base URL
    #[arg(long, env = "AGORA_GATEWAY_URL", global = true)]
    pub gateway_url: Option<String>,

    /// Assistant chat endpoint
    #[arg(long, env = "AGORA_ASSISTANT_URL", global = true)]
    pub assistant_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(short, long, env = "AGORA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami {
        #[arg(long)]
        json: bool,
    },

    /// Create an account, optionally with a developer profile
    Register(RegisterArgs),

    #[command(subcommand, about = "Browse the agent catalog")]
    Agents(AgentCommands),

    #[command(subcommand, about = "Read articles and discussions")]
    Contents(ContentCommands),

    #[command(subcommand, about = "Comment on an agent or a content item")]
    Comment(CommentCommands),

    /// Create an agent with its first version and media in one go
    #[command(disable_version_flag = true)]
    Publish(PublishArgs),

    /// Ask the marketplace assistant; the reply is streamed
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub email: String,
    #[arg(short, long)]
    pub nickname: String,
    /// Read from stdin when omitted
    #[arg(short, long, env = "AGORA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Also create a developer profile
    #[arg(long)]
    pub developer: bool,
    #[arg(long, requires = "developer", default_value = "")]
    pub first_name: String,
    #[arg(long, requires = "developer", default_value = "")]
    pub last_name: String,
    #[arg(long, requires = "developer", default_value = "")]
    pub github: String,
    /// Defaults to the account email
    #[arg(long, requires = "developer", default_value = "")]
    pub support_email: String,
    #[arg(long, requires = "developer", default_value = "")]
    pub support_phone: String,
}

#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// List agents
    List {
        /// Filter by name, description or tag
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Only agents owned by the signed-in user
        #[arg(long)]
        mine: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show one agent with its reviews and discussions
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContentKindArg {
    Article,
    Discussion,
}

#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// List articles and discussions
    List {
        #[arg(short, long, value_enum)]
        kind: Option<ContentKindArg>,
        #[arg(long)]
        json: bool,
    },
    /// Show one content item with its comments
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Review an agent
    Agent {
        id: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Reply to an article or discussion
    Content {
        id: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    #[arg(long)]
    pub name: String,
    /// Short description shown on cards
    #[arg(long)]
    pub description: String,
    #[arg(long, default_value = "")]
    pub long_description: String,
    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
    /// Repeat for several categories
    #[arg(long = "category")]
    pub categories: Vec<String>,
    #[arg(long, default_value = "")]
    pub install_guide: String,
    #[arg(long, default_value = "")]
    pub repo_url: String,
    #[arg(long, default_value = "")]
    pub demo_url: String,

    #[arg(long, default_value = "1.0.0")]
    pub version: String,
    #[arg(long, default_value = "")]
    pub changelog: String,
    /// stable, latest or published
    #[arg(long, default_value = "stable")]
    pub status: String,
    #[arg(long, default_value = "")]
    pub project_path: String,

    /// Image file; the first one becomes the cover
    #[arg(long = "photo")]
    pub photos: Vec<PathBuf>,
    /// MP4 clip
    #[arg(long)]
    pub video: Option<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_publish() {
        let cli = Cli::try_parse_from([
            "agora",
            "publish",
            "--name",
            "Summarizer",
            "--description",
            "Summarizes text",
            "--category",
            "NLP",
            "--category",
            "Productivity",
            "--photo",
            "cover.png",
            "--photo",
            "shot.jpg",
        ])
        .unwrap();

        let Commands::Publish(args) = cli.command else {
            panic!("expected publish");
        };
        assert_eq!(args.version, "1.0.0");
        assert_eq!(args.status, "stable");
        assert_eq!(args.categories, ["NLP", "Productivity"]);
        assert_eq!(args.photos.len(), 2);
        assert!(args.video.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["agora", "agents", "list", "--mine", "-vv", "--gateway-url", "http://gw"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.gateway_url.as_deref(), Some("http://gw"));
        assert!(matches!(cli.command, Commands::Agents(AgentCommands::List { mine: true, .. })));
    }

    #[test]
    fn test_developer_fields_need_flag() {
        let result = Cli::try_parse_from([
            "agora", "register", "-e", "a@b.io", "-n", "ann", "-p", "secret1", "--first-name", "Ann",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["agora", "ask", "which", "agent", "writes", "SQL?"]).unwrap();
        let Commands::Ask { question } = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(question.join(" "), "which agent writes SQL?");
    }
}
