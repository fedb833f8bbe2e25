//! Build values service
//!
//! Loads the company configuration and services descriptor and resolves the
//! build values for one request.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::{
    descriptor::{load_clients, load_companies},
    error::Result,
    resolve::{find_company, resolve, ResolutionResult},
};

/// Parameters for a resolution
pub struct ValuesRequest {
    pub server_flavour: String,
    pub company: Option<String>,
    pub config_path: PathBuf,
    pub services_path: PathBuf,
}

/// Service for resolving build values from the project's documents
pub struct ValuesService;

impl ValuesService {
    pub fn resolve(request: &ValuesRequest) -> Result<ResolutionResult> {
        // The company list is only needed when resolving by company
        let companies = match &request.company {
            Some(_) => {
                debug!("Reading companies from {}", request.config_path.display());
                load_companies(&request.config_path)?
            }
            None => Vec::new(),
        };

        // Fail on an unknown company before touching the services descriptor
        if let Some(name) = &request.company {
            find_company(&companies, name)?;
        }

        debug!("Reading clients from {}", request.services_path.display());
        let clients = load_clients(&request.services_path)?;

        let result = resolve(
            &request.server_flavour,
            request.company.as_deref(),
            &companies,
            &clients,
        )?;

        info!(
            "Resolved {} for flavour {}: {}",
            if result.company_id.is_empty() {
                "default client"
            } else {
                result.company_id.as_str()
            },
            request.server_flavour,
            result.app_id
        );

        Ok(result)
    }
}
