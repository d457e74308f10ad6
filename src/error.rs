use thiserror::Error;

/// Unified error type for ci-semver-tag operations
#[derive(Error, Debug)]
pub enum TagError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Commit parse error: {0}")]
    CommitParse(String),

    #[error("Hosting API error: {0}")]
    HostingApi(String),

    #[error("Version control error: {0}")]
    VersionControl(String),

    #[error("Version parsing error: {0}")]
    VersionParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ci-semver-tag
pub type Result<T> = std::result::Result<T, TagError>;

impl TagError {
    /// Create a configuration error with context
    pub fn configuration(msg: impl Into<String>) -> Self {
        TagError::Configuration(msg.into())
    }

    /// Create a commit parse error with context
    pub fn commit_parse(msg: impl Into<String>) -> Self {
        TagError::CommitParse(msg.into())
    }

    /// Create a hosting API error with context
    pub fn hosting_api(msg: impl Into<String>) -> Self {
        TagError::HostingApi(msg.into())
    }

    /// Create a version control error with context
    pub fn version_control(msg: impl Into<String>) -> Self {
        TagError::VersionControl(msg.into())
    }

    /// Create a version parse error with context
    pub fn version_parse(msg: impl Into<String>) -> Self {
        TagError::VersionParse(msg.into())
    }
}

impl From<git2::Error> for TagError {
    fn from(e: git2::Error) -> Self {
        TagError::VersionControl(e.message().to_string())
    }
}

impl From<reqwest::Error> for TagError {
    fn from(e: reqwest::Error) -> Self {
        TagError::HostingApi(e.to_string())
    }
}
