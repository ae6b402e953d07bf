//! Interactive extraction of server log files from a running container.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use kyber_tools::{
    container_exists, container_running, logs, parse_selection, prompt, runtime_available,
    DockerCli,
};

#[derive(Parser, Debug)]
#[command(
    name = "kyber-logs",
    version,
    about = "Extract Kyber server log files from a running docker container."
)]
struct Cli {
    /// Print each docker invocation before running it
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !runtime_available() {
        bail!("Docker is not installed or not in PATH");
    }

    let docker = DockerCli::new(cli.verbose);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let container = prompt::prompt_required(&mut input, "Enter container name")?;
    if !container_exists(&docker, &container)? {
        bail!("container '{container}' does not exist");
    }
    if !container_running(&docker, &container)? {
        bail!(
            "container '{container}' exists but is not running; start it with: docker start {container}"
        );
    }

    let files = logs::list_log_files(&docker, &container)?;
    if files.is_empty() {
        println!("No .log files found in container.");
        return Ok(());
    }

    println!("\nLog files found:");
    for (i, file) in files.iter().enumerate() {
        println!("{}) {}", i + 1, file);
    }
    println!();

    let expr = prompt::prompt_required(
        &mut input,
        "Select log files to extract (e.g. 1, 1-3, 1-3,5)",
    )?;
    let selected = parse_selection(&expr, &files).context("invalid selection")?;

    println!();
    let dest = prompt::prompt_optional(
        &mut input,
        "Destination directory (leave empty for current directory)",
    )?;
    let dest = if dest.is_empty() {
        env::current_dir().context("failed to resolve current directory")?
    } else {
        PathBuf::from(dest)
    };

    logs::extract_logs(&docker, &container, &selected, &dest)?;
    println!("\nDone.");
    Ok(())
}
