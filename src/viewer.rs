//! Open generated files with the desktop's default application

use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

use crate::errors::{BootcampError, Result};

fn opener(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut c = Command::new("open");
        c.arg(path);
        c
    }
    #[cfg(windows)]
    {
        let mut c = Command::new("cmd");
        // The empty string is the window title `start` expects first
        c.args(["/C", "start", ""]).arg(path);
        c
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    }
}

/// Launch the default viewer for `path` without waiting for it
///
/// The launcher is reaped on a background thread so repeated opens from the
/// menu leave no zombie processes.
pub fn open(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BootcampError::Report(format!(
            "cannot open {}: file does not exist",
            path.display()
        )));
    }

    let mut cmd = opener(path);
    cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
    debug!(path = %path.display(), "opening in default viewer");

    let child = cmd.spawn().map_err(|e| {
        warn!(error = %e, "no default viewer available");
        BootcampError::Report(format!("could not open {}: {}", path.display(), e))
    })?;
    reap(child);
    Ok(())
}

fn reap(mut child: Child) {
    std::thread::spawn(move || match child.wait() {
        Ok(status) => debug!(%status, "viewer launcher exited"),
        Err(e) => warn!(error = %e, "could not wait for viewer launcher"),
    });
}
