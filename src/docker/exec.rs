#![allow(clippy::module_name_repetitions)]
//! Docker subprocess invocation helpers.

use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// Handle for invoking the docker CLI.
///
/// Verbose mode echoes each command line to stderr before running it. Calls
/// block until the subprocess exits; there is no timeout layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerCli {
    verbose: bool,
}

impl DockerCli {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run a docker subcommand with inherited stdio. A non-zero exit status
    /// is an error.
    pub fn run(&self, args: &[&str]) -> Result<()> {
        if self.verbose {
            eprintln!("Running: docker {}", args.join(" "));
        }
        let status = Command::new("docker")
            .args(args)
            .status()
            .with_context(|| format!("failed to spawn docker {}", args.join(" ")))?;
        if !status.success() {
            bail!("docker {} exited with {status}", args.join(" "));
        }
        Ok(())
    }

    /// Run a docker subcommand and capture its stdout. A non-zero exit
    /// status is an error carrying the subprocess stderr.
    pub fn capture(&self, args: &[&str]) -> Result<String> {
        if self.verbose {
            eprintln!("Running: docker {}", args.join(" "));
        }
        let out = Command::new("docker")
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to spawn docker {}", args.join(" ")))?;
        if !out.status.success() {
            bail!(
                "docker {} exited with {}: {}",
                args.join(" "),
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}
