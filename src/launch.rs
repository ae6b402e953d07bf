//! `docker run` command assembly for the dedicated server.
//!
//! [`build_docker_command`] is pure: config in, single-line command string
//! out. Executing, saving, and printing the result are separate
//! side-effecting consumers so tests can assert on the string without
//! spawning anything.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Fixed image reference for the dedicated server, appended last.
pub const SERVER_IMAGE: &str = "ghcr.io/armchairdevelopers/kyber-server:latest";

/// Module channel that is implied when no channel binding is emitted.
pub const DEFAULT_MODULE_CHANNEL: &str = "main";

/// Flat launch configuration, collected once per interactive session and
/// consumed once by [`build_docker_command`].
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub container_name: String,
    pub maxima_email: String,
    pub maxima_password: String,
    pub kyber_token: String,
    pub server_name: String,
    pub server_description: String,
    pub server_password: String,
    pub max_players: String,
    pub map_rotation: String,
    pub module_channel: String,
    pub game_data_path: String,
    pub mod_folder_path: String,
    pub plugin_folder_path: String,
    pub restart_unless_stopped: bool,
}

/// Wrap a value in double quotes, escaping any embedded double quote.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

/// Assemble the full `docker run` invocation as one shell command line.
///
/// Optional bindings (restart policy, non-default module channel,
/// description, password, mod and plugin folders) are emitted only when
/// set. Values that may carry spaces or specials are quoted; max players
/// and the image reference are plain tokens.
pub fn build_docker_command(cfg: &ServerConfig) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push("docker run -it".to_string());
    parts.push("--name".to_string());
    parts.push(cfg.container_name.clone());

    if cfg.restart_unless_stopped {
        parts.push("--restart=unless-stopped".to_string());
    }

    let creds = format!("{}:{}", cfg.maxima_email, cfg.maxima_password);
    parts.push(format!("-e MAXIMA_CREDENTIALS={}", quote(&creds)));
    parts.push(format!("-e KYBER_TOKEN={}", cfg.kyber_token));
    parts.push(format!("-e KYBER_SERVER_NAME={}", quote(&cfg.server_name)));
    parts.push(format!("-e KYBER_SERVER_MAX_PLAYERS={}", cfg.max_players));
    parts.push(format!("-e KYBER_MAP_ROTATION={}", quote(&cfg.map_rotation)));

    if cfg.module_channel != DEFAULT_MODULE_CHANNEL {
        parts.push(format!("-e KYBER_MODULE_CHANNEL={}", cfg.module_channel));
    }

    if !cfg.server_description.is_empty() {
        parts.push(format!(
            "-e KYBER_SERVER_DESCRIPTION={}",
            quote(&cfg.server_description)
        ));
    }

    if !cfg.server_password.is_empty() {
        parts.push(format!(
            "-e KYBER_SERVER_PASSWORD={}",
            quote(&cfg.server_password)
        ));
    }

    parts.push(format!(
        "-v {}",
        quote(&format!("{}:/mnt/battlefront", cfg.game_data_path))
    ));

    if !cfg.mod_folder_path.is_empty() {
        parts.push(format!(
            "-v {}:/mnt/battlefront/mods",
            quote(&cfg.mod_folder_path)
        ));
        parts.push("-e KYBER_MOD_FOLDER=/mnt/battlefront/mods".to_string());
    }

    if !cfg.plugin_folder_path.is_empty() {
        parts.push(format!(
            "-v {}:/mnt/battlefront/plugins",
            quote(&cfg.plugin_folder_path)
        ));
        parts.push("-e KYBER_SERVER_PLUGINS_PATH=/mnt/battlefront/plugins".to_string());
    }

    parts.push(SERVER_IMAGE.to_string());

    parts.join(" ")
}

/// Execute an assembled command through `/bin/sh -c` with inherited stdio.
pub fn run_launch_command(command: &str) -> Result<()> {
    let status = Command::new("/bin/sh")
        .arg("-c")
        .arg(command)
        .status()
        .context("failed to spawn /bin/sh")?;
    if !status.success() {
        bail!("docker run exited with {status}");
    }
    Ok(())
}

/// Persist an assembled command as a single-line shell file (trailing
/// newline), then mark it executable.
pub fn save_launch_command(path: &Path, command: &str) -> Result<()> {
    fs::write(path, format!("{command}\n"))
        .with_context(|| format!("failed to save {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("failed to mark {} executable", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ServerConfig {
        ServerConfig {
            container_name: "kyber1".to_string(),
            maxima_email: "user@example.com".to_string(),
            maxima_password: "hunter2".to_string(),
            kyber_token: "tok123".to_string(),
            server_name: "My Server".to_string(),
            max_players: "40".to_string(),
            map_rotation: "bWFwcw==".to_string(),
            module_channel: DEFAULT_MODULE_CHANNEL.to_string(),
            game_data_path: "/srv/battlefront".to_string(),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn minimal_config_produces_expected_command() {
        let cmd = build_docker_command(&base_config());
        assert_eq!(
            cmd,
            "docker run -it --name kyber1 \
             -e MAXIMA_CREDENTIALS=\"user@example.com:hunter2\" \
             -e KYBER_TOKEN=tok123 \
             -e KYBER_SERVER_NAME=\"My Server\" \
             -e KYBER_SERVER_MAX_PLAYERS=40 \
             -e KYBER_MAP_ROTATION=\"bWFwcw==\" \
             -v \"/srv/battlefront:/mnt/battlefront\" \
             ghcr.io/armchairdevelopers/kyber-server:latest"
        );
    }

    #[test]
    fn default_module_channel_is_omitted() {
        let cmd = build_docker_command(&base_config());
        assert!(!cmd.contains("KYBER_MODULE_CHANNEL"));
    }

    #[test]
    fn non_default_module_channel_is_emitted() {
        let mut cfg = base_config();
        cfg.module_channel = "beta".to_string();
        let cmd = build_docker_command(&cfg);
        assert!(cmd.contains("-e KYBER_MODULE_CHANNEL=beta"));
    }

    #[test]
    fn empty_optionals_are_omitted() {
        let cmd = build_docker_command(&base_config());
        assert!(!cmd.contains("KYBER_SERVER_DESCRIPTION"));
        assert!(!cmd.contains("KYBER_SERVER_PASSWORD"));
        assert!(!cmd.contains("KYBER_MOD_FOLDER"));
        assert!(!cmd.contains("KYBER_SERVER_PLUGINS_PATH"));
        assert!(!cmd.contains("--restart"));
    }

    #[test]
    fn restart_policy_is_gated_on_flag() {
        let mut cfg = base_config();
        cfg.restart_unless_stopped = true;
        let cmd = build_docker_command(&cfg);
        assert!(cmd.contains("--restart=unless-stopped"));
    }

    #[test]
    fn mod_and_plugin_folders_emit_volume_and_env_pairs() {
        let mut cfg = base_config();
        cfg.mod_folder_path = "/srv/mods".to_string();
        cfg.plugin_folder_path = "/srv/plugins".to_string();
        let cmd = build_docker_command(&cfg);
        assert!(cmd.contains("-v \"/srv/mods\":/mnt/battlefront/mods"));
        assert!(cmd.contains("-e KYBER_MOD_FOLDER=/mnt/battlefront/mods"));
        assert!(cmd.contains("-v \"/srv/plugins\":/mnt/battlefront/plugins"));
        assert!(cmd.contains("-e KYBER_SERVER_PLUGINS_PATH=/mnt/battlefront/plugins"));
    }

    #[test]
    fn image_reference_is_last_token() {
        let cmd = build_docker_command(&base_config());
        assert!(cmd.ends_with(SERVER_IMAGE));
    }

    #[test]
    fn embedded_double_quote_is_escaped() {
        let mut cfg = base_config();
        cfg.server_name = "The \"Best\" Server".to_string();
        let cmd = build_docker_command(&cfg);
        assert!(cmd.contains("-e KYBER_SERVER_NAME=\"The \\\"Best\\\" Server\""));
        assert!(!cmd.contains('\n'));
    }

    #[test]
    fn quote_wraps_and_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a \"b\" c"), "\"a \\\"b\\\" c\"");
        assert_eq!(quote(""), "\"\"");
    }
}
