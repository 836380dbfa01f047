//! Channel setup: point the user at the web page where delivery channels
//! (email, Slack, mobile push, ...) are managed.

use std::io::Write;

use url::Url;

use crate::config::{Credentials, Settings, PAGES_HOST_ENV};
use crate::error::{Error, Result};

const CHANNELS_PATH: &str = "/codeinbox/channels";

/// Build the channel management URL for the logged-in user.
pub fn setup_url(credentials: &Credentials, settings: &Settings) -> Result<Url> {
    let credentials = credentials.require_login()?;

    let mut url = Url::parse(&format!("{}{}", settings.pages_host, CHANNELS_PATH)).map_err(|e| {
        Error::InvalidInput(format!(
            "invalid {} value {:?}: {}",
            PAGES_HOST_ENV, settings.pages_host, e
        ))
    })?;
    url.query_pairs_mut().append_pair("token", &credentials.token);
    Ok(url)
}

/// Print the channel management URL. Makes no network call.
pub fn setup<W: Write>(credentials: &Credentials, settings: &Settings, out: &mut W) -> Result<()> {
    let url = setup_url(credentials, settings)?;
    writeln!(out, "Please manage your notification channels at {}", url).map_err(Error::Console)
}
