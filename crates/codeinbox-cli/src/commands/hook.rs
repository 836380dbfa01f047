use std::io;

use anyhow::Result;
use clap::Subcommand;
use codeinbox_core::api::HookProvider;
use codeinbox_core::hook;

use super::Context;

#[derive(Subcommand, Debug)]
pub enum HookCommand {
    /// Claude Code hook events
    #[command(subcommand)]
    Claude(ClaudeEvent),
}

#[derive(Subcommand, Debug)]
pub enum ClaudeEvent {
    /// Forward a Notification hook event (JSON on stdin)
    Notification,
}

pub async fn execute(ctx: &Context, cmd: HookCommand) -> Result<()> {
    let provider = match cmd {
        HookCommand::Claude(ClaudeEvent::Notification) => HookProvider::Claude,
    };

    let client = ctx.client()?;
    let stdin = io::stdin();
    hook::forward(&client, &ctx.credentials, provider, &mut stdin.lock()).await?;
    Ok(())
}
