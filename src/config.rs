use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TagError};

/// Environment variables that must be present before anything else runs.
pub const REQUIRED_ENV_VARS: [&str; 7] = [
    "CI_REPOSITORY_URL",
    "CI_PROJECT_ID",
    "CI_PROJECT_URL",
    "CI_PROJECT_PATH",
    "NPA_USERNAME",
    "NPA_PASSWORD",
    "CI_SERVER_HOST",
];

/// Default settings file name, looked up in the working directory and the user config dir.
pub const SETTINGS_FILE_NAME: &str = "ci-semver-tag.toml";

/// Values injected by the CI platform, captured once at startup.
///
/// Nothing else in the crate reads the process environment; components receive
/// this struct (or the fields they need) explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct CiEnvironment {
    pub repository_url: String,
    pub project_id: String,
    pub project_url: String,
    pub project_path: String,
    pub username: String,
    pub password: String,
    pub server_host: String,
}

impl CiEnvironment {
    /// Reads the required variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the environment from an arbitrary lookup function.
    ///
    /// Every name in [`REQUIRED_ENV_VARS`] is checked before any value is used,
    /// and the first absent one is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in REQUIRED_ENV_VARS {
            if lookup(name).is_none() {
                return Err(TagError::configuration(format!(
                    "Expected the following environment variable to be set: {}",
                    name
                )));
            }
        }

        let get = |name: &str| lookup(name).unwrap_or_default();

        Ok(CiEnvironment {
            repository_url: get("CI_REPOSITORY_URL"),
            project_id: get("CI_PROJECT_ID"),
            project_url: get("CI_PROJECT_URL"),
            project_path: get("CI_PROJECT_PATH"),
            username: get("NPA_USERNAME"),
            password: get("NPA_PASSWORD"),
            server_host: get("CI_SERVER_HOST"),
        })
    }

    /// Base URL of the hosting server, i.e. the project URL with `/<project path>` cut off.
    ///
    /// `https://gitlab.example.com/group/app` with path `group/app` gives
    /// `https://gitlab.example.com`.
    pub fn hosting_base_url(&self) -> String {
        let suffix = format!("/{}", self.project_path);
        match self.project_url.split_once(&suffix) {
            Some((base, _)) => base.to_string(),
            None => self.project_url.clone(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_initial_version() -> String {
    "1.0.0".to_string()
}

fn default_minor_labels() -> Vec<String> {
    vec!["bump-minor".to_string(), "-bump-minor-".to_string()]
}

fn default_major_labels() -> Vec<String> {
    vec!["bump-major".to_string(), "-bump-major-".to_string()]
}

/// Non-secret tunables, optionally loaded from a TOML file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Remote whose push URL is rewritten and which receives the tag
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Base version used when the repository has no tags yet
    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    #[serde(default)]
    pub labels: LabelSettings,

    /// Credentials file location; `~/.netrc` when unset
    #[serde(default)]
    pub netrc_path: Option<PathBuf>,
}

/// Label literals that select a minor or major bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LabelSettings {
    #[serde(default = "default_minor_labels")]
    pub minor: Vec<String>,

    #[serde(default = "default_major_labels")]
    pub major: Vec<String>,
}

impl Default for LabelSettings {
    fn default() -> Self {
        LabelSettings {
            minor: default_minor_labels(),
            major: default_major_labels(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            remote: default_remote(),
            initial_version: default_initial_version(),
            labels: LabelSettings::default(),
            netrc_path: None,
        }
    }
}

impl Settings {
    /// Resolved credentials file path.
    pub fn netrc_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.netrc_path {
            return Ok(path.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(".netrc"))
            .ok_or_else(|| TagError::configuration("Cannot determine home directory"))
    }
}

/// Loads settings from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `ci-semver-tag.toml` in the current directory
/// 3. `ci-semver-tag.toml` in the user config directory
/// 4. Defaults
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings_str = if let Some(path) = path {
        read_settings_file(path)?
    } else if Path::new(SETTINGS_FILE_NAME).exists() {
        read_settings_file(Path::new(SETTINGS_FILE_NAME))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join(SETTINGS_FILE_NAME);
        if candidate.exists() {
            read_settings_file(&candidate)?
        } else {
            return Ok(Settings::default());
        }
    } else {
        return Ok(Settings::default());
    };

    toml::from_str(&settings_str)
        .map_err(|e| TagError::configuration(format!("Invalid settings file: {}", e)))
}

fn read_settings_file(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading settings");
    fs::read_to_string(path).map_err(|e| {
        TagError::configuration(format!(
            "Cannot read settings file '{}': {}",
            path.display(),
            e
        ))
    })
}
