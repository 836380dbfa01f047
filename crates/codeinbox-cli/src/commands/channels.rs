use std::io;

use anyhow::Result;
use clap::Subcommand;
use codeinbox_core::channels;

use super::Context;

#[derive(Subcommand, Debug)]
pub enum ChannelsCommand {
    /// Print the page where notification channels are managed
    Setup,
}

pub fn execute(ctx: &Context, cmd: ChannelsCommand) -> Result<()> {
    match cmd {
        ChannelsCommand::Setup => {
            channels::setup(&ctx.credentials, &ctx.settings, &mut io::stdout().lock())?;
        }
    }
    Ok(())
}
