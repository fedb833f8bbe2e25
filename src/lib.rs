pub mod cli;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod output;
pub mod rename;
pub mod resolve;
pub mod service;

pub use anyhow::Result;
