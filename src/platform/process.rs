// LaunchPal - platform/process.rs
//
// Real process boundary: detached child spawning and the default-browser
// opener.
//
// Children are started with null stdio so they never hold the launcher's
// console. The launcher never waits on them from the UI thread; a short-lived
// reaper thread collects each exit status so finished children do not linger
// as zombies on Unix, and logs it at DEBUG level.

use crate::core::apps::ProcessSpawner;
use std::io;
use std::process::{Child, Command, Stdio};

/// `ProcessSpawner` backed by `std::process::Command` and the `open` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        tracing::debug!(program, pid = child.id(), "Child process spawned");
        observe_exit(program.to_string(), child);
        Ok(())
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        open::that_detached(url)?;
        tracing::debug!(url, "URL handed to default browser");
        Ok(())
    }
}

/// Wait for `child` on a background thread and log how it exited.
///
/// If the thread cannot be created the child is simply dropped, which
/// leaves it running unobserved.
fn observe_exit(program: String, mut child: Child) {
    let builder = std::thread::Builder::new().name(format!("reap-{}", child.id()));
    let result = builder.spawn(move || match child.wait() {
        Ok(status) => {
            tracing::debug!(program = %program, %status, "Child process exited");
        }
        Err(e) => {
            tracing::debug!(program = %program, error = %e, "Could not wait on child process");
        }
    });

    if let Err(e) = result {
        tracing::warn!(error = %e, "Cannot start exit observer thread");
    }
}
