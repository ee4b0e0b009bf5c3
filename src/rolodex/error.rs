use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("'{0}' already exists in the address book")]
    DuplicateName(String),

    #[error("'{0}' record not found")]
    ContactNotFound(String),

    #[error("Phone '{phone}' not found for '{name}'")]
    PhoneNotFound { name: String, phone: String },

    #[error("Could not access {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RolodexError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RolodexError::Persistence {
            path: path.into(),
            source,
        }
    }

    /// True for the errors a user can correct by re-entering input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RolodexError::EmptyName
                | RolodexError::DuplicateName(_)
                | RolodexError::ContactNotFound(_)
                | RolodexError::PhoneNotFound { .. }
                | RolodexError::Api(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
