use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find your home directory")]
    HomeDirUnavailable,

    #[error("Failed to access config file {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Please login first using the 'login' command")]
    LoginRequired,

    #[error("Console I/O failed")]
    Console(#[source] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub(crate) fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::config::ConfigStore;

    #[test]
    fn test_config_io_chain_names_cause_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        // A directory where the file should be makes the read fail
        std::fs::create_dir_all(store.path()).unwrap();

        let err = store.load().unwrap_err();
        let cause = match &err {
            Error::ConfigIo { source, .. } => source.to_string(),
            other => panic!("unexpected error: {:?}", other),
        };

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert!(chain.starts_with("Failed to access config file "), "{}", chain);
        assert_eq!(chain.matches(cause.as_str()).count(), 1, "{}", chain);
    }

    #[tokio::test]
    async fn test_transport_chain_names_cause_once() {
        // Nothing listens on the discard port
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err: Error = client
            .request_login_code("dev@example.com")
            .await
            .unwrap_err()
            .into();

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert!(chain.starts_with("Network error: "), "{}", chain);
        assert_eq!(chain.matches("error sending request").count(), 1, "{}", chain);
    }
}
