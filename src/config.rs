use serde::Deserialize;
use std::path::Path;

/// Operating mode: text to Morse, or Morse to text.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Encode,
    Decode,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Encode
    }
}

/// User-tunable defaults, loaded from TOML.
///
/// Fields left out of a file stay unset and fall through to the next layer.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub strict: Option<bool>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load settings from a custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load settings with user overrides from standard locations
    /// 1. Start with built-in defaults
    /// 2. Override with ~/.config/dotdash/config.toml if it exists
    /// 3. Override with ./dotdash.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::default();

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("dotdash").join("config.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_settings) => {
                        settings.merge(user_settings);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = Path::new("dotdash.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_settings) => {
                    settings.merge(local_settings);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(settings)
    }

    /// Merge another settings layer into this one; set fields win
    pub fn merge(&mut self, other: Settings) {
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.strict.is_some() {
            self.strict = other.strict;
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}
