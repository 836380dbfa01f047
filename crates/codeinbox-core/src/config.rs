//! Local configuration: the persisted credential record and host settings.
//!
//! The credential record is stored at `~/.codeinbox/config.json` (or under
//! `$CODEINBOX_HOME` when set). It is created with empty fields on first
//! run and overwritten wholesale on every successful login.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Config directory name under the user's home directory
const CONFIG_DIR_NAME: &str = ".codeinbox";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CODEINBOX_HOME";

/// Environment variable overriding the API host
pub const API_HOST_ENV: &str = "API_HOST";

/// Environment variable overriding the web host used for channel management
pub const PAGES_HOST_ENV: &str = "PAGES_HOST";

const DEFAULT_API_HOST: &str = "https://api.magicbell.com";
const DEFAULT_PAGES_HOST: &str = "https://app.magicbell.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    /// Older releases wrote this field as `jwt`.
    #[serde(default, alias = "jwt")]
    pub token: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !self.email.is_empty() && !self.token.is_empty()
    }

    /// Fail with `Error::LoginRequired` unless both fields are set.
    pub fn require_login(&self) -> Result<&Self> {
        if self.is_logged_in() {
            Ok(self)
        } else {
            Err(Error::LoginRequired)
        }
    }
}

/// Owns the location of the credential file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the config directory from `$CODEINBOX_HOME` or the home directory.
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(dir));
        }
        let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
        Ok(Self::new(home.join(CONFIG_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Load the credential record, creating an empty one if none exists.
    pub fn load(&self) -> Result<Credentials> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|source| Error::ConfigParse { path, source }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "No config file found, creating default");
                let default = Credentials::default();
                self.save(&default)?;
                Ok(default)
            }
            Err(e) => Err(Error::config_io(path, e)),
        }
    }

    /// Replace the credential file with `credentials`.
    ///
    /// The record is written to a temporary file in the same directory and
    /// renamed over the target, so readers never observe a partial file.
    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        self.ensure_dir()?;
        let path = self.path();

        let contents = serde_json::to_string_pretty(credentials)
            .map_err(|source| Error::ConfigParse {
                path: path.clone(),
                source,
            })?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|e| Error::config_io(&self.dir, e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| Error::config_io(tmp.path(), e))?;
        restrict_to_owner(tmp.path(), 0o600)?;
        tmp.persist(&path)
            .map_err(|e| Error::config_io(&path, e.error))?;

        debug!(?path, "Config saved");
        Ok(())
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|e| Error::config_io(&self.dir, e))?;
        restrict_to_owner(&self.dir, 0o700)
    }
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| Error::config_io(path, e))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// Remote hosts the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_host: String,
    pub pages_host: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            pages_host: DEFAULT_PAGES_HOST.to_string(),
        }
    }
}

impl Settings {
    /// Build settings from `API_HOST` and `PAGES_HOST`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_host: resolve(API_HOST_ENV, DEFAULT_API_HOST),
            pages_host: resolve(PAGES_HOST_ENV, DEFAULT_PAGES_HOST),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn store() -> (tempfile::TempDir, ConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(".codeinbox"));
        (dir, store)
    }

    #[test]
    fn test_load_creates_default_when_missing() {
        let (_dir, store) = store();
        assert!(!store.path().exists());

        let creds = store.load().unwrap();
        assert_eq!(creds, Credentials::default());
        assert!(store.path().exists());

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({"email": "", "token": ""}));
    }

    #[test]
    fn test_load_does_not_recreate_existing_file() {
        let (_dir, store) = store();
        store.load().unwrap();

        // A second load must read, not reset, what is already there
        fs::write(store.path(), r#"{"email": "a@b.co", "token": "t"}"#).unwrap();
        let creds = store.load().unwrap();
        assert_eq!(creds, Credentials::new("a@b.co", "t"));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, store) = store();
        let creds = Credentials::new("dev@example.com", "eyJhbGciOi.\"quoted\"\\slash");
        store.save(&creds).unwrap();
        assert_eq!(store.load().unwrap(), creds);
    }

    #[test]
    fn test_save_writes_indented_json() {
        let (_dir, store) = store();
        store.save(&Credentials::new("dev@example.com", "tok")).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\n  \"email\": \"dev@example.com\""));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = store();
        store.save(&Credentials::new("dev@example.com", "tok")).unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_accepts_legacy_jwt_field() {
        let (_dir, store) = store();
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.path(), r#"{"email": "a@b.co", "jwt": "legacy"}"#).unwrap();
        assert_eq!(store.load().unwrap().token, "legacy");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let (_dir, store) = store();
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_require_login() {
        assert!(Credentials::new("a@b.co", "t").require_login().is_ok());
        assert!(matches!(
            Credentials::new("a@b.co", "").require_login(),
            Err(Error::LoginRequired)
        ));
        assert!(matches!(
            Credentials::new("", "t").require_login(),
            Err(Error::LoginRequired)
        ));
    }

    #[test]
    fn test_settings_defaults_and_overrides() {
        let empty: HashMap<&str, &str> = HashMap::new();
        let settings = Settings::from_lookup(|k| empty.get(k).map(|v| v.to_string()));
        assert_eq!(settings, Settings::default());

        let env = HashMap::from([
            (API_HOST_ENV, "http://localhost:4000/"),
            (PAGES_HOST_ENV, "  "),
        ]);
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.api_host, "http://localhost:4000");
        assert_eq!(settings.pages_host, DEFAULT_PAGES_HOST);
    }
}
