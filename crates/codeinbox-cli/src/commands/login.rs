use std::io;

use anyhow::Result;
use clap::Args;
use codeinbox_core::auth;

use super::Context;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address to send the login code to
    pub email: String,
}

pub async fn execute(ctx: &Context, args: LoginArgs) -> Result<()> {
    let client = ctx.client()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    auth::login(
        &client,
        &ctx.store,
        &args.email,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .await?;
    Ok(())
}
