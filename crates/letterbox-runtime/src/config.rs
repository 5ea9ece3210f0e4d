use crate::{Error, Result};
use letterbox_engine::ElapsedAnchor;
use letterbox_types::UserId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LETTERBOX_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.letterbox (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LETTERBOX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("letterbox"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".letterbox"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
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

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Letters requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Reference instant for "N hours ago" on delivered letters
    #[serde(default)]
    pub elapsed_anchor: ElapsedAnchor,

    /// Viewer used when `--viewer` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<UserId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            elapsed_anchor: ElapsedAnchor::default(),
            viewer: None,
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(Self::FILE_NAME)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.elapsed_anchor, ElapsedAnchor::Delivered);
        assert!(config.viewer.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            page_size: 5,
            elapsed_anchor: ElapsedAnchor::Created,
            viewer: Some(UserId::new("alice")),
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "viewer = \"bob\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.viewer, Some(UserId::new("bob")));
        assert_eq!(loaded.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(loaded.elapsed_anchor, ElapsedAnchor::Delivered);

        Ok(())
    }

    #[test]
    fn test_invalid_anchor_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "elapsed_anchor = \"sometime\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_effective_page_size_clamps() {
        let mut config = Config::default();
        config.page_size = 0;
        assert_eq!(config.effective_page_size(), 1);
        config.page_size = 10_000;
        assert_eq!(config.effective_page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/tmp/letters"), PathBuf::from("/tmp/letters"));
        assert_eq!(expand_tilde("~user/letters"), PathBuf::from("~user/letters"));
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(expand_tilde("~/letters"), PathBuf::from(home).join("letters"));
        }
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        let path = resolve_data_dir(Some("/tmp/letterbox-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/letterbox-explicit"));
        Ok(())
    }
}
