use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration, read from `<default root>/config.json`.
///
/// A flat key-value mapping; unknown keys are ignored so the file survives
/// older and newer versions of the tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base directory holding all persisted history data.
    #[serde(default)]
    pub mhist_root: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&default_root()?.join("config.json"))
    }

    /// A missing file is not an error; defaults apply.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }
}

/// Resolve the history root directory based on priority:
/// 1. Explicit `--root` flag (with tilde expansion)
/// 2. `MHIST_ROOT` environment variable (with tilde expansion)
/// 3. `mhist_root` from the config file
/// 4. `~/.config/mhist`
pub fn resolve_root(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_root) = std::env::var("MHIST_ROOT") {
        return Ok(expand_tilde(&env_root));
    }

    let config = Config::load()?;
    if let Some(root) = config.mhist_root {
        return Ok(expand_tilde(&root));
    }

    default_root()
}

/// `~/.config/mhist`, the default home of both config and data.
pub fn default_root() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine the home directory")?;
    Ok(home.join(".config").join("mhist"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.json")).unwrap();
        assert!(config.mhist_root.is_none());
    }

    #[test]
    fn root_key_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"mhist_root": "/srv/history"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.mhist_root.as_deref(), Some("/srv/history"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"mhist_root": "/srv/history", "theme": "dark"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.mhist_root.as_deref(), Some("/srv/history"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn explicit_root_wins() {
        let root = resolve_root(Some("/explicit/root")).unwrap();
        assert_eq!(root, PathBuf::from("/explicit/root"));
    }
}
