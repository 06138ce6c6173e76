// src/gui/actions/open_folder.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::gui::app::App;

/// Open the destination folder (or its nearest existing parent) in the file manager.
pub fn open_folder(app: &mut App) {
    let typed = app.dest_text.trim();
    let folder = if typed.is_empty() {
        app.state.options.output.dir.clone()
    } else {
        PathBuf::from(typed)
    };

    let folder_to_open = find_nearest_existing_parent(&folder);

    let absolute_folder = match fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {e}");
            loge!("{msg}");
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {e}");
        app.status(format!("Failed to open folder: {e}"));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Walk up until something exists; falls back to the working directory.
pub(crate) fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        std::process::Command::new(program)
            .arg(path)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("Failed to spawn {program}: {e}"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
