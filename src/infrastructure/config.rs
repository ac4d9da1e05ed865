//! Configuration management

use crate::domain::tag_page::DEFAULT_LAYOUT;
use crate::domain::DelimiterMode;
use crate::error::{Result, TagPagesError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the site root when `--config` is not given
pub const CONFIG_FILE: &str = "_tagpages.toml";

/// Keys accepted in the config file
pub const CONFIG_KEYS: &[&str] = &["posts_dir", "extension", "output_dir", "layout", "delimiters"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub posts_dir: PathBuf,
    pub extension: String,
    pub output_dir: PathBuf,
    pub layout: String,
    pub delimiters: DelimiterMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            posts_dir: PathBuf::from("./_posts"),
            extension: "markdown".to_string(),
            output_dir: PathBuf::from("./tags"),
            layout: DEFAULT_LAYOUT.to_string(),
            delimiters: DelimiterMode::default(),
        }
    }
}

impl Config {
    /// Load config from an explicit file, or from `_tagpages.toml` in `site_root`
    /// if present. Without either, the built-in defaults apply.
    pub fn load(explicit: Option<&Path>, site_root: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = site_root.join(CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_from_file(&default_path)
                } else {
                    log::debug!("no {} found, using defaults", CONFIG_FILE);
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load config from the given TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagPagesError::Config(format!("Config file not found: {}", path.display()))
            } else {
                TagPagesError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            TagPagesError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Check values that the file format alone cannot rule out.
    /// Run again after command-line overrides are applied.
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(TagPagesError::Config(
                "extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the posts directory was chosen rather than left at its default
    pub fn has_custom_posts_dir(&self) -> bool {
        self.posts_dir != Config::default().posts_dir
    }
}
