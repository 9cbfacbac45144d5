use std::fmt;
use std::path::PathBuf;

/// Machine-readable error codes for scripts and agents driving `bv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    PreferencesReadFailed,
    PreferencesWriteFailed,
    DataSourceUnavailable,
    DataSourceMalformed,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::PreferencesReadFailed => "E2001",
            Self::PreferencesWriteFailed => "E2002",
            Self::DataSourceUnavailable => "E3001",
            Self::DataSourceMalformed => "E3002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::PreferencesReadFailed => "View preferences could not be read",
            Self::PreferencesWriteFailed => "View preferences could not be saved",
            Self::DataSourceUnavailable => "Ticket data source unavailable",
            Self::DataSourceMalformed => "Ticket data source returned malformed data",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in boardview/config.toml and retry."),
            Self::PreferencesReadFailed => {
                Some("Check the preferences file; it is rewritten on the next change.")
            }
            Self::PreferencesWriteFailed => Some("Check disk space and write permissions."),
            Self::DataSourceUnavailable => {
                Some("Check network access or pass --input with a local JSON export.")
            }
            Self::DataSourceMalformed => {
                Some("The document must be an object with `tickets` and `users` arrays.")
            }
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised at the edges of the board: configuration, preference
/// storage, and the ticket data source. The derivation engine itself never
/// fails.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("failed to parse config {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("preference storage at {path}: {source}")]
    Storage {
        path: PathBuf,
        code: ErrorCode,
        #[source]
        source: std::io::Error,
    },

    #[error("data source {origin}: {reason}")]
    DataSource {
        origin: String,
        code: ErrorCode,
        reason: String,
    },
}

impl BoardError {
    /// Build a data-source error for an unreachable or failing origin.
    pub fn unavailable(origin: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::DataSource {
            origin: origin.into(),
            code: ErrorCode::DataSourceUnavailable,
            reason: reason.to_string(),
        }
    }

    /// Build a data-source error for a document that failed to decode.
    pub fn malformed(origin: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::DataSource {
            origin: origin.into(),
            code: ErrorCode::DataSourceMalformed,
            reason: reason.to_string(),
        }
    }

    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Config { .. } => ErrorCode::ConfigParseError,
            Self::Storage { code, .. } | Self::DataSource { code, .. } => *code,
        }
    }

    /// Remediation hint, falling back to the generic message.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or_else(|| code.message()).to_string()
    }
}
