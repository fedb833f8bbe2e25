//! Service layer for business logic orchestration
//!
//! Keeps document loading and resolution out of the CLI layer in main.rs.

pub mod values;

pub use values::{ValuesRequest, ValuesService};
