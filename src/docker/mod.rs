#![allow(clippy::module_name_repetitions)]
//! Docker collaborator: runtime discovery, container state probes, and
//! subprocess plumbing. The runtime is treated as an opaque CLI; each call
//! here is one blocking invocation.

pub mod exec;
pub mod runtime;

pub use exec::DockerCli;
pub use runtime::{
    container_exists, container_running, container_runtime_path, runtime_available,
};
