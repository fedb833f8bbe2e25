use anyhow::Result;
use buildvals::{
    cli::{Cli, Commands},
    config::Config,
    constants::exit_code,
    error::ValuesError,
    output::OutputSink,
    rename::rename_artifacts,
    service::{ValuesRequest, ValuesService},
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        let code = e
            .downcast_ref::<ValuesError>()
            .map(ValuesError::exit_code)
            .unwrap_or(exit_code::FAILURE);
        std::process::exit(code);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Resolve {
            server_flavour,
            company,
            config_file,
            services_file,
            github_output,
            json,
        } => {
            let config = Config::load()?;

            let request = ValuesRequest {
                server_flavour,
                company,
                config_path: config_file.unwrap_or_else(|| config.config_file.clone()),
                services_path: services_file.unwrap_or_else(|| config.services_file.clone()),
            };
            let result = ValuesService::resolve(&request)?;

            let sink = OutputSink::new(github_output.or_else(|| config.output_path_from_env()));
            sink.emit(&result.output_lines())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Commands::Rename {
            path,
            new_prefix,
            existing_prefix,
        } => {
            let report = rename_artifacts(&path, &new_prefix, &existing_prefix)?;
            for renamed in &report.renamed {
                println!("{}", renamed.display());
            }
        }
        Commands::Version => {
            println!("buildvals {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
