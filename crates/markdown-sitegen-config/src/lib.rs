use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern {pattern:?} in {config_path}: {source}")]
    InvalidPattern {
        config_path: PathBuf,
        pattern: String,
        source: glob::PatternError,
    },
}

/// Project layout, read from `sitegen.toml` at the project root.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
    pub clean: bool,
    /// Glob patterns, relative to `content_dir`, for pages to skip.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            public_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
            clean: true,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "sitegen.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        for pattern in &config.exclude {
            glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                config_path: config_path.to_path_buf(),
                pattern: pattern.clone(),
                source,
            })?;
        }

        // Expand shell variables and tilde in every configured path
        for path in [
            &mut config.content_dir,
            &mut config.static_dir,
            &mut config.public_dir,
            &mut config.template,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }

        Ok(Some(config))
    }

    /// Loads `sitegen.toml` from `project_root`, if there is one.
    pub fn load(project_root: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path(project_root))
    }

    pub fn config_path(project_root: &Path) -> PathBuf {
        project_root.join(Self::FILE_NAME)
    }

    /// Anchors relative paths at `project_root`. Absolute paths are kept.
    pub fn resolve(&self, project_root: &Path) -> Self {
        Self {
            content_dir: project_root.join(&self.content_dir),
            static_dir: project_root.join(&self.static_dir),
            public_dir: project_root.join(&self.public_dir),
            template: project_root.join(&self.template),
            clean: self.clean,
            exclude: self.exclude.clone(),
        }
    }

    /// True when `relative_path` (relative to `content_dir`, `/`-separated)
    /// matches any exclude pattern.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(relative_path))
                .unwrap_or(false)
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
