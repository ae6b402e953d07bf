//! Interactive assembly of the dedicated server's `docker run` command.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;

use kyber_tools::launch::{run_launch_command, save_launch_command};
use kyber_tools::prompt::{
    prompt_container_name, prompt_optional, prompt_required, prompt_yes_no,
};
use kyber_tools::{
    build_docker_command, runtime_available, ServerConfig, DEFAULT_MODULE_CHANNEL,
};

#[derive(Parser, Debug)]
#[command(
    name = "kyber-launch",
    version,
    about = "Assemble the docker run command for a Kyber dedicated server, then run, save, or print it."
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn collect_config(input: &mut impl io::BufRead) -> Result<ServerConfig> {
    let mut cfg = ServerConfig {
        module_channel: DEFAULT_MODULE_CHANNEL.to_string(),
        ..ServerConfig::default()
    };

    cfg.maxima_email = prompt_required(input, "EA account email")?;
    cfg.maxima_password = prompt_required(input, "EA account password")?;
    cfg.kyber_token = prompt_required(input, "Kyber token")?;
    cfg.server_name = prompt_required(input, "Server name")?;
    cfg.server_description =
        prompt_optional(input, "Server description (optional, leave blank for none)")?;
    cfg.server_password =
        prompt_optional(input, "Server password (optional, leave blank for none)")?;
    cfg.max_players = prompt_required(input, "Max players")?;
    cfg.map_rotation = prompt_required(input, "Map rotation BASE64 string")?;

    let channel = prompt_optional(input, "Kyber module channel (default: main)")?;
    if !channel.is_empty() {
        cfg.module_channel = channel;
    }

    cfg.game_data_path = prompt_required(input, "Path to game data on host")?;
    cfg.mod_folder_path = prompt_optional(
        input,
        "Path to mod folder on host (leave blank if not using mods)",
    )?;
    cfg.plugin_folder_path = prompt_optional(
        input,
        "Path to plugin folder on host (leave blank if not using plugins)",
    )?;

    cfg.container_name =
        prompt_container_name(input, "Docker container name (no spaces, use - or _)")?;
    cfg.restart_unless_stopped =
        prompt_yes_no(input, "Automatically restart container unless stopped? (y/n)")?;

    Ok(cfg)
}

fn run() -> Result<()> {
    if !runtime_available() {
        bail!("Docker is not installed or not in PATH");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Kyber Dedicated Server Docker Setup");
    println!("----------------------------------");

    let cfg = collect_config(&mut input)?;
    let command = build_docker_command(&cfg);

    println!("\nWhat would you like to do?");
    println!("1) Run the command");
    println!("2) Save the command to a file");
    println!("3) Run the command and save it to a file");
    println!("4) Print the command only");

    let choice = prompt_required(&mut input, "Select an option (1-4)")?;
    match choice.as_str() {
        "1" => {
            println!("\nRunning command...\n");
            run_launch_command(&command)?;
        }
        "2" => {
            let path = prompt_required(&mut input, "Enter file path to save command")?;
            save_launch_command(Path::new(&path), &command)?;
            println!("Command saved to {path}");
        }
        "3" => {
            let path = prompt_required(&mut input, "Enter file path to save command")?;
            save_launch_command(Path::new(&path), &command)?;
            println!("Command saved to {path}");
            println!("\nRunning command...\n");
            run_launch_command(&command)?;
        }
        "4" => {
            println!("\nDocker command:\n");
            println!("{command}");
        }
        _ => println!("Invalid option."),
    }

    Ok(())
}
