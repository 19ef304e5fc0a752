//! Runtime configuration for the folio front end.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::profile::Profile;

/// Environment variable naming a config file when no CLI argument is given.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Top-level configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Prompt shown before the edit line and before echoed input.
    /// Empty means "derive from the profile" (`<handle>@portfolio:~$`).
    pub prompt: String,
    /// Lines printed when the session starts.
    pub greeting: Vec<String>,
    /// Play the scripted intro sequence before accepting input.
    pub intro: bool,
    /// Per-character delay of the greeting typewriter, in milliseconds.
    /// Zero turns the greeting and stats animations off.
    pub typewriter_ms: u64,
    /// Profile file (`.toml` or `.json`). Relative paths resolve against the
    /// directory of the config file.
    pub profile: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            greeting: vec![
                "Welcome to my portfolio terminal.".to_string(),
                "Type 'help' to see available commands.".to_string(),
            ],
            intro: true,
            typewriter_ms: 20,
            profile: None,
        }
    }
}

impl FolioConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file. Relative `profile` paths are rebased onto the
    /// config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(profile) = config.profile.take() {
            let resolved = match path.parent() {
                Some(dir) if profile.is_relative() => dir.join(profile),
                _ => profile,
            };
            config.profile = Some(resolved);
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the config from an explicit path, the `FOLIO_CONFIG`
    /// variable, or the built-in defaults, in that order.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Load the configured profile, or the built-in one.
    pub fn load_profile(&self) -> Result<Profile> {
        match &self.profile {
            Some(path) => Profile::load(path),
            None => Ok(Profile::default()),
        }
    }

    /// The prompt to display for a given profile.
    pub fn prompt_for(&self, profile: &Profile) -> String {
        if self.prompt.is_empty() {
            format!("{}@portfolio:~$", profile.handle())
        } else {
            self.prompt.clone()
        }
    }
}
