use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.csv";

pub const KEY_CONTACTS_FILE: &str = "contacts-file";
pub const KEY_CLEAR_SCREEN: &str = "clear-screen";

/// Configuration for rolodex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Contacts file; relative paths resolve against the working directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: PathBuf,

    /// Clear the terminal between menu actions
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_contacts_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONTACTS_FILE)
}

fn default_clear_screen() -> bool {
    true
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_CONTACTS_FILE, KEY_CLEAR_SCREEN]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_CONTACTS_FILE => Some(self.contacts_file.display().to_string()),
            KEY_CLEAR_SCREEN => Some(self.clear_screen.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_CONTACTS_FILE => {
                if value.trim().is_empty() {
                    return Err("contacts-file cannot be empty".to_string());
                }
                self.contacts_file = PathBuf::from(value);
                Ok(())
            }
            KEY_CLEAR_SCREEN => {
                self.clear_screen = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for {}: {}", key, value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
