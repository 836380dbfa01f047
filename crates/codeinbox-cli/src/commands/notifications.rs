use std::io;

use anyhow::Result;
use clap::{Args, Subcommand};
use codeinbox_core::notifications::{self, DEFAULT_LIMIT};

use super::Context;

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// List the most recent notifications
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of notifications to show
    #[arg(long, short = 'n', default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

pub async fn execute(ctx: &Context, cmd: NotificationsCommand) -> Result<()> {
    match cmd {
        NotificationsCommand::List(args) => {
            let client = ctx.client()?;
            notifications::list(&client, &ctx.credentials, args.limit, &mut io::stdout().lock())
                .await?;
        }
    }
    Ok(())
}
