//! Hand a written image over to the desktop's default viewer.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use super::RenderError;

/// Spawn the platform image viewer on `path` without waiting for it.
pub(super) fn open(path: &Path) -> Result<(), RenderError> {
    let mut command = viewer_command(path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    debug!("Opening {} with {:?}", path.display(), command);
    command.spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
