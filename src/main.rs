use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use pipflow::config::Config;
use pipflow::manifest::ManifestStore;
use pipflow::ops::{Operation, Operations, report};
use pipflow::rebuild::{ProcessRunner, RebuildTrigger};
use pipflow::version::registries::PypiRegistry;
use pipflow::version::resolver::VersionResolver;

#[derive(Parser)]
#[command(name = "pipflow")]
#[command(version, about = "Manage pinned requirements and rebuild the container image")]
struct Cli {
    /// Manifest file, relative to the working directory
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Base URL of the package index
    #[arg(long, global = true)]
    index_url: Option<String>,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "directory", global = true)]
    directory: Option<PathBuf>,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a package pinned at its latest version
    Add { package: String },
    /// Remove a package from the manifest
    Remove { package: String },
    /// Upgrade a package to its latest version
    Upgrade { package: String },
    /// Upgrade all packages to their latest version
    UpgradeAll,
    /// View available upgrades for all packages
    ViewAll,
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::Add { package } => Operation::Add(package),
            Command::Remove { package } => Operation::Remove(package),
            Command::Upgrade { package } => Operation::Upgrade(package),
            Command::UpgradeAll => Operation::UpgradeAll,
            Command::ViewAll => Operation::ViewAll,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = pipflow::logging::init(cli.verbose);

    let config = Config::load();
    let working_dir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let manifest = working_dir.join(cli.manifest.unwrap_or(config.manifest));
    let index_url = cli.index_url.unwrap_or(config.index_url);

    let operations = Operations::new(
        ManifestStore::new(manifest),
        VersionResolver::new(Arc::new(PypiRegistry::new(index_url))),
        RebuildTrigger::new(working_dir, Arc::new(ProcessRunner)),
    );

    let operation = Operation::from(cli.command);
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(operations.run(&operation));

    let conclusion = report::conclude(result)?;
    print!("{}", conclusion.stdout);
    eprint!("{}", conclusion.stderr);
    Ok(ExitCode::from(conclusion.exit_code))
}
