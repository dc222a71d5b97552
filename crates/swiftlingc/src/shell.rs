//! The `Shell` injected capability (spec §6): run an external command,
//! optionally with a timeout, the way `mesh-codegen::link::link` shells
//! out to `cc` and turns a non-zero exit into a typed failure.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

/// The result of running an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

pub trait Shell {
    /// Runs `argv[0]` with the remaining entries as arguments, optionally
    /// in `cwd`, aborting after `timeout` if given. Returns `None` on
    /// timeout (spec §5, §6).
    fn run(&self, argv: &[String], cwd: Option<&Path>, timeout: Option<Duration>) -> Option<CommandOutput>;
}

/// The default `Shell`, backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdShell;

impl Shell for StdShell {
    fn run(&self, argv: &[String], cwd: Option<&Path>, timeout: Option<Duration>) -> Option<CommandOutput> {
        let (program, args) = argv.split_first()?;
        let mut cmd = Command::new(program);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().ok()?;

        let Some(timeout) = timeout else {
            let output = child.wait_with_output().ok()?;
            return Some(to_command_output(output));
        };

        // `Child` owns the pipes we need to drain, so it has to move into
        // the waiting thread; keep its pid behind so a timed-out wait can
        // still kill it.
        let pid = child.id();
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        match rx.recv_timeout(timeout) {
            Ok(Ok(output)) => Some(to_command_output(output)),
            Ok(Err(_)) => None,
            Err(_) => {
                kill(pid);
                None
            }
        }
    }
}

#[cfg(unix)]
fn kill(pid: u32) {
    let _ = Command::new("kill").arg("-9").arg(pid.to_string()).status();
}

#[cfg(not(unix))]
fn kill(pid: u32) {
    let _ = Command::new("taskkill").args(["/PID", &pid.to_string(), "/F"]).status();
}

fn to_command_output(output: std::process::Output) -> CommandOutput {
    CommandOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
