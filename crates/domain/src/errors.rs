use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot access hosts file {path}: {reason}")]
    FileAccess { path: String, reason: String },

    #[error("Failed to scan hosts file {path}: {reason}")]
    Scan { path: String, reason: String },

    #[error("Cannot bind UDP socket on {addr}: {reason}")]
    SocketBind { addr: String, reason: String },

    #[error("DNS codec error: {0}")]
    Codec(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl DomainError {
    pub fn file_access(path: impl Into<String>, reason: impl ToString) -> Self {
        DomainError::FileAccess {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn scan(path: impl Into<String>, reason: impl ToString) -> Self {
        DomainError::Scan {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
