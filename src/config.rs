use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::VersionOrdering;
use crate::error::{ReleaseNotesError, Result};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "relnotes.toml";

/// Represents the complete configuration for git-relnotes.
///
/// Contains version tag discovery, output locations and rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub versions: VersionsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// How release tags are recognized and ordered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct VersionsConfig {
    /// Literal prefix in front of `major.minor.patch`, e.g. `v` or `release-`
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub ordering: VersionOrdering,
}

fn default_template() -> PathBuf {
    PathBuf::from("./releasenotes.tmpl")
}

fn default_output() -> PathBuf {
    PathBuf::from("./RELEASENOTES.md")
}

/// Where the template is read from and the rendered notes are written to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default = "default_output")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            template: default_template(),
            path: default_output(),
        }
    }
}

fn default_strict() -> bool {
    true
}

/// Template rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RenderConfig {
    /// Fail when a template references a field that does not exist
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            strict: default_strict(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relnotes.toml` in current directory
/// 3. `.relnotes.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(path) = path else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ReleaseNotesError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|e| {
        ReleaseNotesError::config(format!("Cannot parse {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(format!(".{}", CONFIG_FILE_NAME));
    user.exists().then_some(user)
}

/// Resolve a possibly relative path against the current working directory
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
