use serde::Serialize;
use tracing::debug;

use crate::constants::{flavour, paths};
use crate::descriptor::{ClientRecord, CompanyRecord};
use crate::error::{Result, ValuesError};

/// Build values derived for one (company, flavour) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub company_id: String,
    pub path: String,
    pub build_command: String,
    pub app_id: String,
}

impl ResolutionResult {
    /// `KEY=value` lines in the order CI steps consume them
    pub fn output_lines(&self) -> Vec<String> {
        vec![
            format!("COMPANY_ID={}", self.company_id),
            format!("PATH={}", self.path),
            format!("BUILD_COMMAND={}", self.build_command),
            format!("APP_ID={}", self.app_id),
        ]
    }
}

/// Resolve the build values for a flavour, optionally scoped to a company
pub fn resolve(
    server_flavour: &str,
    company_name: Option<&str>,
    companies: &[CompanyRecord],
    clients: &[ClientRecord],
) -> Result<ResolutionResult> {
    let company = company_name
        .map(|name| find_company(companies, name))
        .transpose()?;

    let client = match company {
        Some(company) => {
            let base_id = company
                .app_id()
                .ok_or_else(|| ValuesError::MissingCompanyAppId(company.id.clone()))?;
            let package_name = qualified_package_id(base_id, server_flavour);
            debug!("Looking up client with package_name={}", package_name);
            find_client(clients, &package_name)?
        }
        None => single_client(clients)?,
    };

    let app_id = client
        .mobilesdk_app_id()
        .ok_or(ValuesError::MissingClientAppId)?;

    let company_id = company.map(|c| c.id.as_str()).unwrap_or_default();

    Ok(ResolutionResult {
        company_id: company_id.to_string(),
        path: output_path(company_id, server_flavour),
        build_command: build_command(company_id, server_flavour),
        app_id: app_id.to_string(),
    })
}

/// First company whose id contains `name`, ignoring case
pub fn find_company<'a>(companies: &'a [CompanyRecord], name: &str) -> Result<&'a CompanyRecord> {
    let needle = name.to_lowercase();
    companies
        .iter()
        .find(|c| c.id.to_lowercase().contains(&needle))
        .ok_or_else(|| ValuesError::CompanyNotFound(name.to_string()))
}

/// Package id for a flavour: `prod` keeps the base id, others get a suffix
pub fn qualified_package_id(base_id: &str, server_flavour: &str) -> String {
    if server_flavour.eq_ignore_ascii_case(flavour::PROD) {
        base_id.to_string()
    } else {
        format!("{}.{}", base_id, server_flavour.to_lowercase())
    }
}

fn find_client<'a>(clients: &'a [ClientRecord], package_name: &str) -> Result<&'a ClientRecord> {
    clients
        .iter()
        .find(|c| c.package_name() == Some(package_name))
        .ok_or_else(|| ValuesError::ClientNotFound(package_name.to_string()))
}

fn single_client(clients: &[ClientRecord]) -> Result<&ClientRecord> {
    match clients {
        [only] => Ok(only),
        _ => Err(ValuesError::AmbiguousClient(clients.len())),
    }
}

/// Gradle APK output directory for the variant
pub fn output_path(company_id: &str, server_flavour: &str) -> String {
    format!(
        "{}/{}{}/release/",
        paths::APK_OUTPUT_ROOT,
        company_id,
        titlecase_first(server_flavour)
    )
}

/// Gradle assemble task for the variant.
///
/// Uses the flavour exactly as given, unlike [`output_path`]; CI jobs match
/// on both strings as they are.
pub fn build_command(company_id: &str, server_flavour: &str) -> String {
    format!(":app:assemble{}{}Release", company_id, server_flavour)
}

/// Upper-case the first character if it is lower-case
pub fn titlecase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}
