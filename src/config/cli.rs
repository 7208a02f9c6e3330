use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Optional JSON file overriding which pages hold which sections
    #[arg(long, default_value = "site_layout.json")]
    pub layout_file: PathBuf,

    /// Directory for the admin data cache
    #[arg(long, default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the admin HTTP API
    Serve(ServeArgs),
    /// Edit site content through a running API
    Admin(AdminArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 8787)]
    pub port: u16,

    /// Shared secret expected in the X-API-Key header
    #[arg(long, env = "ADMIN_API_KEY")]
    pub api_key: String,

    /// Serve pages from a local working copy instead of GitHub
    #[arg(long)]
    pub checkout_dir: Option<PathBuf>,

    #[arg(long, env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPO")]
    pub github_repo: Option<String>,

    #[arg(long, env = "GITHUB_BRANCH", default_value = "main")]
    pub github_branch: String,

    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,
}

#[derive(ClapArgs, Debug)]
pub struct AdminArgs {
    /// Base URL of the admin API
    #[arg(long, env = "ADMIN_API_URL", default_value = "http://127.0.0.1:8787")]
    pub api_url: String,

    #[arg(long, env = "ADMIN_API_KEY")]
    pub api_key: String,

    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GameFields {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub thumbnail: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "Working")]
    pub status: String,
    /// External game identifier shown as `# <id>`
    #[arg(long, default_value = "")]
    pub game_id: String,
    /// Comma separated feature list
    #[arg(long, default_value = "")]
    pub features: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DeveloperFields {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub role: String,
    #[arg(long, default_value = "")]
    pub avatar: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Comma separated skill list
    #[arg(long, default_value = "")]
    pub skills: String,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Load data from the site and refresh the cache
    Pull,
    /// Show content counts
    Stats,
    AddGame(GameFields),
    EditGame {
        key: String,
        #[command(flatten)]
        fields: GameFields,
    },
    RemoveGame {
        key: String,
    },
    AddVideo {
        url: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a video by its position in the list
    RemoveVideo {
        index: usize,
    },
    AddDeveloper(DeveloperFields),
    EditDeveloper {
        key: String,
        #[command(flatten)]
        fields: DeveloperFields,
    },
    RemoveDeveloper {
        key: String,
    },
    /// Choose the homepage entries (at most three of each)
    Feature {
        #[arg(long = "game")]
        games: Vec<String>,
        #[arg(long = "video")]
        videos: Vec<usize>,
        #[arg(long = "developer")]
        developers: Vec<String>,
    },
    /// Rebuild the homepage previews from the full collections
    SyncHomepage,
    SetIcon {
        url: String,
    },
    Export {
        /// Defaults to sitewright-data-<date>.json
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Import {
        file: PathBuf,
    },
    /// Delete all games, videos and developers
    Reset {
        #[arg(long)]
        yes: bool,
    },
}
