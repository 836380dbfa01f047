//! Hook forwarding: relay an event piped in by an AI coding tool to the
//! notification service.
//!
//! Tools such as Claude Code run `codeinbox hook claude notification` and
//! write the event JSON to its stdin. Input is read up to the first blank
//! line or end of stream.

use std::io::BufRead;

use tracing::info;

use crate::api::{ApiClient, HookProvider};
use crate::config::Credentials;
use crate::error::{Error, Result};

/// Read lines until a blank line or end of stream.
///
/// Each kept line is terminated by `\n` in the result; `\r\n` endings are
/// normalised. Lines after the blank separator are left unread.
pub fn read_payload<R: BufRead>(input: &mut R) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = input.read_until(b'\n', &mut line).map_err(Error::Console)?;
        if read == 0 {
            break;
        }

        let content = strip_line_ending(&line);
        if content.is_empty() {
            break;
        }
        payload.extend_from_slice(content);
        payload.push(b'\n');
    }

    Ok(payload)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Forward the hook payload read from `input` to the provider's endpoint.
pub async fn forward<R: BufRead>(
    client: &ApiClient,
    credentials: &Credentials,
    provider: HookProvider,
    input: &mut R,
) -> Result<()> {
    let credentials = credentials.require_login()?;

    let payload = read_payload(input)?;
    if payload.is_empty() {
        return Err(Error::InvalidInput(
            "no hook payload received on standard input".to_string(),
        ));
    }

    let bytes = payload.len();
    client
        .forward_hook(&credentials.token, provider, payload)
        .await?;
    info!(%provider, bytes, "Hook forwarded");
    Ok(())
}
