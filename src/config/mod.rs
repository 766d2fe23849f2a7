use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::markup::is_valid_name;
use crate::tooltip::{Position, TooltipConfig};

/// Get the default config file path
pub fn default_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join("tiptrigger");
    Ok(config_dir.join("tooltip.toml"))
}

/// Parse a tooltip config from TOML
pub fn parse(content: &str) -> Result<TooltipConfig> {
    Ok(toml::from_str(content)?)
}

/// Load a tooltip config.
///
/// An explicit path must exist and parse. Without one, the per-user default is used
/// when present, and anything wrong with it falls back to defaults.
pub fn load(path: Option<&Path>) -> Result<TooltipConfig> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        return parse(&content);
    }

    let path = match default_path() {
        Ok(p) => p,
        Err(_) => return Ok(TooltipConfig::default()),
    };

    if path.exists() {
        match std::fs::read_to_string(&path) {
            Ok(content) => match parse(&content) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("Failed to parse config: {}", e),
            },
            Err(e) => tracing::warn!("Failed to read config: {}", e),
        }
    }

    Ok(TooltipConfig::default())
}

/// Save config to file
pub fn save(config: &TooltipConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Command-line values layered over a loaded config
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub content: Option<String>,
    pub position: Option<Position>,
    /// `Some("")` clears the min width
    pub min_width: Option<String>,
    pub text_color: Option<String>,
    pub bg_color: Option<String>,
    pub class_name: Option<String>,
    pub inner_class_name: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl Overrides {
    pub fn apply(self, config: &mut TooltipConfig) {
        if let Some(content) = self.content {
            config.content = Some(content);
        }
        if let Some(position) = self.position {
            config.position = position;
        }
        if let Some(width) = self.min_width {
            config.min_width = if width.is_empty() { None } else { Some(width) };
        }
        if let Some(color) = self.text_color {
            config.text_color = color;
        }
        if let Some(color) = self.bg_color {
            config.bg_color = color;
        }
        if self.class_name.is_some() {
            config.class_name = self.class_name;
        }
        if self.inner_class_name.is_some() {
            config.inner_class_name = self.inner_class_name;
        }
        config.attributes.extend(self.attributes);
    }
}

/// Parse a `NAME=VALUE` attribute argument
pub fn parse_attr(s: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", s))?;
    let name = name.trim();
    if !is_valid_name(name) {
        return Err(format!("invalid attribute name `{}`", name));
    }
    Ok((name.to_string(), value.to_string()))
}
