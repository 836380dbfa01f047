//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};
use codeinbox_core::{ApiClient, ConfigStore, Credentials, Settings};

mod channels;
mod hook;
mod login;
mod notifications;

/// codeinbox - Notifications from AI tools (codeinbox.com)
#[derive(Parser, Debug)]
#[command(
    name = "codeinbox",
    version,
    about = "Notifications from AI tools (codeinbox.com)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in with a code sent to your email address
    Login(login::LoginArgs),

    /// Set up notification channels
    #[command(subcommand)]
    Channels(channels::ChannelsCommand),

    /// Forward a tool hook event read from stdin
    #[command(subcommand)]
    Hook(hook::HookCommand),

    /// Show recent notifications
    #[command(subcommand)]
    Notifications(notifications::NotificationsCommand),
}

/// State shared by every command of one invocation.
pub(crate) struct Context {
    pub store: ConfigStore,
    pub credentials: Credentials,
    pub settings: Settings,
}

impl Context {
    fn load() -> Result<Self> {
        let store = ConfigStore::from_env()?;
        let credentials = store.load()?;
        Ok(Self {
            store,
            credentials,
            settings: Settings::from_env(),
        })
    }

    pub fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(&self.settings.api_host)?)
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let ctx = Context::load()?;
        match self.command {
            Commands::Login(args) => login::execute(&ctx, args).await,
            Commands::Channels(cmd) => channels::execute(&ctx, cmd),
            Commands::Hook(cmd) => hook::execute(&ctx, cmd).await,
            Commands::Notifications(cmd) => notifications::execute(&ctx, cmd).await,
        }
    }
}
