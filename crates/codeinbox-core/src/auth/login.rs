use std::io::{BufRead, Write};

use tracing::info;

use crate::api::ApiClient;
use crate::config::{ConfigStore, Credentials};
use crate::error::{Error, Result};

use super::parse_address;

/// Run the email-code login handshake.
///
/// 1. Validate `email` (no network call on failure)
/// 2. Ask the service to email a one-time code
/// 3. Prompt on `out` and read the code as one line from `input`
/// 4. Persist email and code as the new credential record
///
/// The stored record is only replaced at step 4, so any earlier failure
/// leaves the previous login intact.
pub async fn login<R, W>(
    client: &ApiClient,
    store: &ConfigStore,
    email: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Credentials>
where
    R: BufRead,
    W: Write,
{
    if email.trim().is_empty() {
        return Err(Error::InvalidInput(
            "usage: login {email}\nPlease provide an email address to send the login code to."
                .to_string(),
        ));
    }
    let email = parse_address(email)
        .ok_or_else(|| Error::InvalidInput(format!("invalid email address: {}", email)))?;

    client.request_login_code(&email).await?;

    writeln!(out, "Enter Auth Code (sent to {}):", email).map_err(Error::Console)?;
    out.flush().map_err(Error::Console)?;

    let code = read_code(input)?;

    let credentials = Credentials::new(email, code);
    store.save(&credentials)?;
    info!(email = %credentials.email, "Login successful");

    writeln!(
        out,
        "Login successful! Use the 'channels setup' command to configure your notification channels."
    )
    .map_err(Error::Console)?;

    Ok(credentials)
}

fn read_code<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(Error::Console)?;
    if read == 0 {
        return Err(Error::InvalidInput("failed to read auth code".to_string()));
    }

    let code = line.trim_end_matches(&['\n', '\r'][..]);
    if code.is_empty() {
        return Err(Error::InvalidInput("auth code cannot be empty".to_string()));
    }
    Ok(code.to_string())
}
