use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use podlens_k8s::ProviderKind;
use podlens_types::{Language, Lookback};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Optional settings file; every key may be omitted
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub since: Option<Lookback>,
    pub language: Option<Language>,
    pub provider: Option<ProviderKind>,
    pub context: Option<String>,
    pub auto_refresh: Option<bool>,
    pub refresh_interval_secs: Option<u64>,
    pub analysis_cache_size: Option<usize>,
}

impl Settings {
    /// `$XDG_CONFIG_HOME/podlens/config.toml`, else `~/.config/podlens/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        Self::path_from(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }

    fn path_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
        let base = xdg_config_home
            .filter(|dir| dir.is_absolute())
            .or_else(|| home.map(|home| home.join(".config")))?;
        Some(base.join("podlens").join("config.toml"))
    }

    /// Read settings from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
