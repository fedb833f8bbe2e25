//! Input documents read by the resolver
//!
//! The company configuration (`config.json`) and the Firebase services
//! descriptor (`google-services.json`). Only the fields the resolver looks at
//! are modelled; everything else in the documents is ignored.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, ValuesError};

/// Company configuration document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyConfig {
    #[serde(default)]
    pub companies: Vec<CompanyRecord>,
}

/// One tenant entry in the company configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyRecord {
    #[serde(default)]
    pub id: String,
    pub app: Option<CompanyApp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyApp {
    pub id: Option<String>,
}

impl CompanyRecord {
    /// Base Android package id of the company's app
    pub fn app_id(&self) -> Option<&str> {
        self.app.as_ref().and_then(|app| app.id.as_deref())
    }
}

/// Firebase services descriptor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleServices {
    #[serde(default)]
    pub client: Vec<ClientRecord>,
}

/// One Android client registration in the services descriptor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientRecord {
    #[serde(default)]
    pub client_info: ClientInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientInfo {
    pub mobilesdk_app_id: Option<String>,
    #[serde(default)]
    pub android_client_info: AndroidClientInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AndroidClientInfo {
    pub package_name: Option<String>,
}

impl ClientRecord {
    pub fn package_name(&self) -> Option<&str> {
        self.client_info.android_client_info.package_name.as_deref()
    }

    /// Firebase app id, treating an empty string as absent
    pub fn mobilesdk_app_id(&self) -> Option<&str> {
        self.client_info
            .mobilesdk_app_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

/// Load the `companies` list from a company configuration file
pub fn load_companies(path: &Path) -> Result<Vec<CompanyRecord>> {
    let read_err = |reason: String| ValuesError::ConfigRead {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| read_err(e.to_string()))?;
    parse_companies(&content).map_err(|e| read_err(e.to_string()))
}

/// Load the `client` list from a services descriptor file
pub fn load_clients(path: &Path) -> Result<Vec<ClientRecord>> {
    let read_err = |reason: String| ValuesError::ServicesRead {
        path: path.to_path_buf(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| read_err(e.to_string()))?;
    parse_clients(&content).map_err(|e| read_err(e.to_string()))
}

pub fn parse_companies(content: &str) -> serde_json::Result<Vec<CompanyRecord>> {
    let config: CompanyConfig = serde_json::from_str(content)?;
    Ok(config.companies)
}

pub fn parse_clients(content: &str) -> serde_json::Result<Vec<ClientRecord>> {
    let services: GoogleServices = serde_json::from_str(content)?;
    Ok(services.client)
}
