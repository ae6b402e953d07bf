//! Log discovery and extraction from a running container.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::docker::DockerCli;

/// In-container directory the server writes its logs to.
pub const CONTAINER_LOG_DIR: &str = "/root/.local/share/maxima/wine/prefix/drive_c/users/root/AppData/Roaming/ArmchairDevelopers/Kyber/Logs";

/// List `.log` base names inside the container's log directory.
///
/// The listing order defines the 1-based index space used for selection.
/// An empty listing is a clean success, not an error.
pub fn list_log_files(docker: &DockerCli, container: &str) -> Result<Vec<String>> {
    let script = format!("ls -1 {CONTAINER_LOG_DIR}/*.log 2>/dev/null || true");
    let out = docker
        .capture(&["exec", container, "sh", "-c", &script])
        .context("failed to list log files")?;
    Ok(out
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| base_name(line).to_string())
        .collect())
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Copy the selected files out of the container into `dest`, creating the
/// directory first.
///
/// A directory-creation failure aborts before any copy. A single file's
/// copy failure is reported and the loop continues with the next file.
pub fn extract_logs(
    docker: &DockerCli,
    container: &str,
    files: &[String],
    dest: &Path,
) -> Result<()> {
    fs::create_dir_all(dest).with_context(|| {
        format!("failed to create destination directory {}", dest.display())
    })?;

    for file in files {
        let src = format!("{container}:{CONTAINER_LOG_DIR}/{file}");
        let dst = dest.join(file);
        match docker.run(&["cp", &src, &dst.to_string_lossy()]) {
            Ok(()) => println!("Copied {file}"),
            Err(e) => eprintln!("Failed to copy {file}: {e:#}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("/a/b/c.log"), "c.log");
        assert_eq!(base_name("c.log"), "c.log");
    }
}
