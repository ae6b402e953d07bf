//! Push a new module file into a running server container and restart it.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;

use kyber_tools::module::{download_file, swap_module, MODULE_DOWNLOAD_URL};
use kyber_tools::{container_exists, runtime_available, DockerCli, ModuleWhitelist};

const DEFAULT_MODULE_FILE: &str = "Kyber.dll";

#[derive(Parser, Debug)]
#[command(
    name = "kyber-update",
    version,
    about = "Hot-swap a module file inside a running Kyber server container and restart it."
)]
struct Cli {
    /// Enable verbose mode
    #[arg(short = 'v')]
    verbose: bool,

    /// Docker container name
    #[arg(short = 'c', value_name = "CONTAINER_NAME")]
    container: Option<String>,

    /// Input file (default: Kyber.dll)
    #[arg(short = 'f', value_name = "FILE_NAME")]
    file: Option<String>,

    /// Download the latest Kyber.dll instead of using a local file
    #[arg(short = 'd')]
    download: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("See --help for proper usage");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let Some(container) = cli.container.as_deref() else {
        bail!("a docker container name must be provided using -c");
    };

    // Argument validation happens before any probe, network, or filesystem
    // action.
    if cli.download && cli.file.is_some() {
        bail!("-f and -d cannot be used together");
    }

    // The whitelist gates only an explicitly supplied file; the default
    // name is trusted as-is.
    if let Some(file) = cli.file.as_deref() {
        if !ModuleWhitelist::default().allows(file) {
            let base = Path::new(file)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.to_string());
            bail!("invalid file '{base}'");
        }
    }

    if !runtime_available() {
        bail!("Docker is not installed or not in PATH");
    }

    let docker = DockerCli::new(cli.verbose);
    if !container_exists(&docker, container)? {
        bail!("container '{container}' does not exist");
    }

    let file = PathBuf::from(cli.file.as_deref().unwrap_or(DEFAULT_MODULE_FILE));
    if cli.download {
        if cli.verbose {
            eprintln!("Downloading {DEFAULT_MODULE_FILE} from {MODULE_DOWNLOAD_URL}");
        }
        download_file(MODULE_DOWNLOAD_URL, &file)?;
    } else if !file.exists() {
        bail!("host file '{}' does not exist", file.display());
    }

    swap_module(&docker, container, &file)?;

    let base = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("The new {base} has been successfully added to the specified container");
    println!("The docker container has been restarted and is ready for use");
    Ok(())
}
