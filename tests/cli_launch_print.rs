use std::io::Write;
use std::process::{Command, Stdio};

// Scripted answers for every prompt, ending with action 4 (print only).
const SCRIPT: &str = "user@example.com\n\
hunter2\n\
tok123\n\
My \"Best\" Server\n\
\n\
\n\
40\n\
bWFwcw==\n\
\n\
/srv/battlefront\n\
\n\
\n\
kyber1\n\
n\n\
4\n";

#[test]
fn test_print_only_emits_assembled_command() {
    if kyber_tools::container_runtime_path().is_err() {
        eprintln!("skipping: docker not found in PATH");
        return;
    }

    let bin = env!("CARGO_BIN_EXE_kyber-launch");
    let mut child = Command::new(bin)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn kyber-launch");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(SCRIPT.as_bytes())
        .expect("failed to write script");
    let out = child.wait_with_output().expect("failed to wait");

    assert!(
        out.status.success(),
        "kyber-launch exited non-zero: {:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    let command = stdout
        .lines()
        .find(|l| l.starts_with("docker run -it"))
        .unwrap_or_else(|| panic!("no command line in output:\n{stdout}"));

    assert!(command.contains("--name kyber1"), "got: {command}");
    assert!(
        command.contains("-e MAXIMA_CREDENTIALS=\"user@example.com:hunter2\""),
        "got: {command}"
    );
    assert!(
        command.contains("-e KYBER_SERVER_NAME=\"My \\\"Best\\\" Server\""),
        "got: {command}"
    );
    // Defaults: no channel binding, no restart policy, no optional mounts.
    assert!(!command.contains("KYBER_MODULE_CHANNEL"), "got: {command}");
    assert!(!command.contains("--restart"), "got: {command}");
    assert!(
        command.ends_with("ghcr.io/armchairdevelopers/kyber-server:latest"),
        "got: {command}"
    );
}
