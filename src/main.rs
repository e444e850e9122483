use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use artifact_version::catalog::{FsCatalog, LookupContext};
use artifact_version::config::{AppConfig, log_path};
use artifact_version::error::DuplicateError;
use artifact_version::{
    BootstrapOptions, ComponentId, DuplicateChecker, LogicalResource, ProcessRegistry,
    VersionResolver,
};

#[derive(Parser)]
#[command(name = "artifact-version")]
#[command(version, about = "Resolve component versions and detect duplicate artifacts")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lookup path entry (directory or archive); replaces the configured lookup path
    #[arg(short = 'p', long = "path", global = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Write logs to FILE instead of stderr; without a value, to the data directory
    #[arg(long, global = true, value_name = "FILE", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the version of a component
    Version {
        /// Fully-qualified component name (e.g., com.example.core.Service)
        identity: String,
        /// Version reported when nothing else is found
        #[arg(long = "default")]
        default_version: Option<String>,
    },
    /// Report every location providing a component or resource
    Check {
        #[arg(required_unless_present = "resource")]
        identity: Option<String>,
        /// Raw resource key (e.g., com/example/registry/Remote.class)
        #[arg(long, conflicts_with = "identity")]
        resource: Option<String>,
        /// Fail when more than one location is found
        #[arg(long)]
        strict: bool,
        /// Named lookup context to check instead of the caller context
        #[arg(long)]
        context: Option<String>,
    },
    /// Bootstrap the process registry from the configuration
    Status,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let log_file = cli
        .log_file
        .clone()
        .map(|path| path.unwrap_or_else(log_path));
    let _guard = artifact_version::logging::init(log_file.as_deref(), cli.log_json)
        .context("failed to initialize logging")?;

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if !cli.paths.is_empty() {
        config.catalog.lookup_path = cli.paths.clone();
    }
    let catalog = Arc::new(FsCatalog::from_config(&config.catalog));

    match cli.command {
        Command::Version {
            identity,
            default_version,
        } => {
            let identity = ComponentId::new(identity)?;
            let default_version = default_version.unwrap_or(config.default_version);
            let record = VersionResolver::new(catalog).resolve(&identity, &default_version);
            println!("{}", record);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            identity,
            resource,
            strict,
            context,
        } => {
            let resource = match (identity, resource) {
                (_, Some(resource)) => LogicalResource::new(resource)?,
                (Some(identity), None) => {
                    LogicalResource::for_component(&ComponentId::new(identity)?)
                }
                (None, None) => anyhow::bail!("either an identity or --resource is required"),
            };
            let context = context.map_or(LookupContext::Caller, LookupContext::Named);

            match DuplicateChecker::new(catalog).check_duplicate_in(&resource, &context, strict) {
                Ok(report) => {
                    for location in &report.locations {
                        println!("{}", location);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(DuplicateError::Conflict(report)) => {
                    eprintln!("{}", report);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Status => {
            let options = BootstrapOptions::from_config(&config)
                .context("status needs an \"identity\" in the configuration")?;
            let registry = match ProcessRegistry::bootstrap(catalog, options) {
                Ok(registry) => registry,
                Err(DuplicateError::Conflict(report)) => {
                    eprintln!("{}", report);
                    return Ok(ExitCode::FAILURE);
                }
            };

            println!("identity: {}", registry.identity());
            println!("version: {}", registry.version());
            if let Some(semver) = registry.version().semver() {
                println!("semver: {}", semver);
            }
            println!(
                "locations: {}",
                registry.duplicate_report().locations.len()
            );
            for (name, enabled) in registry.features() {
                println!("feature {}: {}", name, enabled);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
