use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pencil_quantize::{DistanceMetric, KernelType};
use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "PENCEL_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Palette definition file
    #[serde(default = "default_palette")]
    pub palette: PathBuf,

    /// Output grid size in cells
    #[serde(default)]
    pub grid: GridConfig,

    /// Resampling kernel, by name
    #[serde(default, deserialize_with = "from_name")]
    pub kernel: KernelType,

    /// Color distance metric, by name
    #[serde(default, deserialize_with = "from_name")]
    pub metric: DistanceMetric,

    /// Pixels per cell when writing a PNG
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_palette() -> PathBuf {
    PathBuf::from("data/pal_cp.txt")
}

fn default_scale() -> u32 {
    8
}

/// Deserialize a string through the target's `FromStr`
fn from_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// Output grid dimensions
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    #[serde(default = "default_grid_extent")]
    pub width: u32,
    #[serde(default = "default_grid_extent")]
    pub height: u32,
}

fn default_grid_extent() -> u32 {
    32
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_grid_extent(),
            height: default_grid_extent(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from [`CONFIG_ENV`] if `path` is
    /// `None`. With neither, the built-in defaults are used.
    ///
    /// A named file that cannot be read or parsed is an error; it never
    /// falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match path.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::load_file(&path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            palette = %config.palette.display(),
            kernel = %config.kernel,
            metric = %config.metric,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // an empty document deserializes as unit, not as an all-default map
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that extents are positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "grid",
                value: format!("{}x{}", self.grid.width, self.grid.height),
            });
        }
        if self.scale == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scale",
                value: self.scale.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            grid: GridConfig::default(),
            kernel: KernelType::default(),
            metric: DistanceMetric::default(),
            scale: default_scale(),
        }
    }
}
