#![allow(clippy::module_name_repetitions)]
//! Docker runtime discovery and container state probes.
//!
//! Callers compose the probes in order: runtime available, container exists,
//! container running. Each is a hard gate; probing the running flag of an
//! unknown container is an error, never `false`.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use which::which;

use crate::docker::exec::DockerCli;

pub fn container_runtime_path() -> io::Result<PathBuf> {
    if let Ok(p) = which("docker") {
        return Ok(p);
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Docker is required but was not found in PATH.",
    ))
}

pub fn runtime_available() -> bool {
    container_runtime_path().is_ok()
}

/// Check whether `name` is known to the runtime, stopped containers
/// included. Matching is a trimmed exact comparison against each listed
/// name.
pub fn container_exists(docker: &DockerCli, name: &str) -> Result<bool> {
    let out = docker
        .capture(&["ps", "-a", "--format", "{{.Names}}"])
        .context("failed to list containers")?;
    Ok(listing_contains(&out, name))
}

/// Line-based match against `docker ps` name output. Each listed name is
/// trimmed before the exact, case-sensitive comparison.
fn listing_contains(listing: &str, name: &str) -> bool {
    listing.lines().any(|line| line.trim() == name)
}

/// Query the running flag of a single container. The runtime reports the
/// flag as a literal `true`/`false` string.
pub fn container_running(docker: &DockerCli, name: &str) -> Result<bool> {
    let out = docker
        .capture(&["inspect", "-f", "{{.State.Running}}", name])
        .with_context(|| format!("failed to inspect container '{name}'"))?;
    Ok(out.trim() == "true")
}
