use std::path::PathBuf;
use thiserror::Error;

use crate::constants::exit_code;

pub type Result<T> = std::result::Result<T, ValuesError>;

/// Failure classes a CI caller can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigReadFailure,
    NotFound,
    MissingField,
    AmbiguousOrMissing,
}

#[derive(Error, Debug)]
pub enum ValuesError {
    #[error("Failed to read {}: {reason}", .path.display())]
    ConfigRead { path: PathBuf, reason: String },

    #[error("Failed to read {}: {reason}", .path.display())]
    ServicesRead { path: PathBuf, reason: String },

    #[error("No company found with name {0}")]
    CompanyNotFound(String),

    #[error("Company entry {0} does not contain app.id")]
    MissingCompanyAppId(String),

    #[error("No client found in services descriptor with package_name={0}")]
    ClientNotFound(String),

    #[error("Could not find mobilesdk_app_id for the matched client")]
    MissingClientAppId,

    #[error("Expected exactly one client when no company is given, found {0}")]
    AmbiguousClient(usize),
}

impl ValuesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigRead { .. } | Self::ServicesRead { .. } => ErrorKind::ConfigReadFailure,
            Self::CompanyNotFound(_) | Self::ClientNotFound(_) => ErrorKind::NotFound,
            Self::MissingCompanyAppId(_) | Self::MissingClientAppId => ErrorKind::MissingField,
            Self::AmbiguousClient(_) => ErrorKind::AmbiguousOrMissing,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigRead { .. } => exit_code::CONFIG_READ,
            Self::CompanyNotFound(_) => exit_code::COMPANY_NOT_FOUND,
            Self::ServicesRead { .. } => exit_code::SERVICES_READ,
            Self::MissingCompanyAppId(_) => exit_code::MISSING_COMPANY_APP_ID,
            Self::ClientNotFound(_) => exit_code::CLIENT_NOT_FOUND,
            Self::MissingClientAppId => exit_code::MISSING_CLIENT_APP_ID,
            Self::AmbiguousClient(_) => exit_code::AMBIGUOUS_CLIENT,
        }
    }
}
