use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoTextError {
    #[error("Traversal failed: {0}")]
    TraversalError(String),

    #[error("File read failed: {0}")]
    FileReadError(String),

    #[error("Output write failed: {0}")]
    OutputWriteError(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, RepoTextError>;

impl From<std::io::Error> for RepoTextError {
    fn from(err: std::io::Error) -> Self {
        RepoTextError::IoError(err.to_string())
    }
}

impl From<walkdir::Error> for RepoTextError {
    fn from(err: walkdir::Error) -> Self {
        RepoTextError::TraversalError(err.to_string())
    }
}

impl From<serde_json::Error> for RepoTextError {
    fn from(err: serde_json::Error) -> Self {
        RepoTextError::ConfigError(err.to_string())
    }
}
