use crate::args::DeployAction;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// mpv loads every Lua file in `~/.mpv/scripts` at startup; the rendered
/// template makes it call `mhist record` whenever a file starts playing.
const SCRIPT_TEMPLATE: &str = include_str!("../../assets/mhist.lua");

pub fn handle(action: DeployAction) -> Result<()> {
    let scripts_dir = mpv_scripts_dir()?;
    let script_path = scripts_dir.join("mhist.lua");

    if action.enable {
        let script = SCRIPT_TEMPLATE.replace("@MHIST_BIN@", &mhist_bin());

        fs::create_dir_all(&scripts_dir)
            .with_context(|| format!("failed to create {}", scripts_dir.display()))?;
        fs::write(&script_path, script)
            .with_context(|| format!("failed to write {}", script_path.display()))?;

        println!("Installed {}", script_path.display());
    } else if action.disable {
        // Removal is idempotent: disabling an integration that is not
        // installed succeeds.
        match fs::remove_file(&script_path) {
            Ok(()) => println!("Removed {}", script_path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to remove {}", script_path.display()));
            }
        }
    }

    Ok(())
}

fn mpv_scripts_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine the home directory")?;
    Ok(home.join(".mpv").join("scripts"))
}

/// Absolute path of the running executable, so the installed script works
/// without mhist on PATH. Falls back to the bare name and a PATH lookup.
fn mhist_bin() -> String {
    std::env::current_exe()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| "mhist".to_string())
}
