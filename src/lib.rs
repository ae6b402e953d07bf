//! Host-side toolkit for operating a containerized Kyber dedicated server.
//!
//! Three binaries share this library:
//! - `kyber-logs` extracts log files from a running server container.
//! - `kyber-update` hot-swaps a whitelisted module file and restarts the
//!   container.
//! - `kyber-launch` assembles a complete `docker run` command from an
//!   interactively collected configuration, then runs, saves, or prints it.
//!
//! The docker CLI is an opaque collaborator; every invocation is a blocking
//! subprocess call gated behind the probes in [`docker::runtime`].

pub mod docker;
pub mod launch;
pub mod logs;
pub mod module;
pub mod prompt;
pub mod select;
pub mod whitelist;

pub use docker::{
    container_exists, container_running, container_runtime_path, runtime_available, DockerCli,
};
pub use launch::{
    build_docker_command, quote, ServerConfig, DEFAULT_MODULE_CHANNEL, SERVER_IMAGE,
};
pub use select::parse_selection;
pub use whitelist::ModuleWhitelist;
