//! Module hot-swap inside a running container.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::docker::DockerCli;

/// In-container directory holding the loadable module files.
pub const CONTAINER_MODULE_DIR: &str = "/root/.local/share/kyber/module";

/// Upstream location of the current module build.
pub const MODULE_DOWNLOAD_URL: &str =
    "https://github.com/LevelDreadnought/Kyber/raw/refs/heads/ver/beta10/Module/Kyber.dll";

/// Fetch `url` into `dest`, streaming the body to disk. Any non-success
/// status is an error.
pub fn download_file(url: &str, dest: &Path) -> Result<()> {
    let mut resp =
        reqwest::blocking::get(url).with_context(|| format!("failed to fetch {url}"))?;
    if !resp.status().is_success() {
        bail!("download failed: {}", resp.status());
    }
    let mut out = File::create(dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;
    io::copy(&mut resp, &mut out)
        .with_context(|| format!("failed to write {}", dest.display()))?;
    Ok(())
}

/// Swap `file` into the container's module directory and restart the
/// container.
///
/// The existing in-container file is moved aside to `<name>.old` first.
/// Backup-move, copy-in, and restart are hard sequential gates: the first
/// failure aborts, with no rollback and no restoration of the backup.
pub fn swap_module(docker: &DockerCli, container: &str, file: &Path) -> Result<()> {
    let base = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("file path has no base name: {}", file.display()))?;

    let backup = format!("mv {CONTAINER_MODULE_DIR}/{base} {CONTAINER_MODULE_DIR}/{base}.old");
    docker
        .run(&["exec", container, "bash", "-c", &backup])
        .with_context(|| format!("failed to back up the existing {base}"))?;

    let target = format!("{container}:{CONTAINER_MODULE_DIR}/{base}");
    docker
        .run(&["cp", &file.to_string_lossy(), &target])
        .with_context(|| format!("failed to copy {base} into the container"))?;

    docker
        .run(&["restart", container])
        .context("failed to restart the container")?;

    Ok(())
}
