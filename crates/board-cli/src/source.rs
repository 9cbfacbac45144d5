//! Where board data comes from: an HTTP endpoint or a local JSON file.
//!
//! Both carry the same `{ "tickets": [...], "users": [...] }` document.

use board_core::BoardData;
use board_core::error::BoardError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = "boardview-cli";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http { endpoint: String, timeout: Duration },
    File(PathBuf),
}

impl DataSource {
    /// A local file wins over the endpoint when both are available.
    #[must_use]
    pub fn select(input: Option<&Path>, endpoint: String, timeout_secs: u64) -> Self {
        match input {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Http {
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }

    /// Human-readable origin for logs and error messages.
    #[must_use]
    pub fn origin(&self) -> String {
        match self {
            Self::Http { endpoint, .. } => endpoint.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Fetch and decode the whole board document.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DataSource`] when the origin cannot be reached or
    /// read, or when the payload is not a board document.
    pub fn fetch(&self) -> Result<BoardData, BoardError> {
        let data = match self {
            Self::Http { endpoint, timeout } => fetch_http(endpoint, *timeout)?,
            Self::File(path) => read_file(path)?,
        };
        debug!(
            origin = %self.origin(),
            tickets = data.tickets.len(),
            users = data.users.len(),
            "fetched board data"
        );
        Ok(data)
    }
}

fn fetch_http(endpoint: &str, timeout: Duration) -> Result<BoardData, BoardError> {
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();

    let response = agent
        .get(endpoint)
        .set("Accept", "application/json")
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|err| BoardError::unavailable(endpoint, err.to_string()))?;

    response
        .into_json::<BoardData>()
        .map_err(|err| BoardError::malformed(endpoint, err.to_string()))
}

fn read_file(path: &Path) -> Result<BoardData, BoardError> {
    let origin = path.display().to_string();
    let content =
        fs::read_to_string(path).map_err(|err| BoardError::unavailable(&origin, err.to_string()))?;
    serde_json::from_str(&content).map_err(|err| BoardError::malformed(&origin, err.to_string()))
}
