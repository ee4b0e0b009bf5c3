//! `rolodex config`: show or change settings in `config.json`.
//!
//! Keys are checked against [`RolodexConfig::keys`] before the file is read, so
//! a typo is reported even when the config on disk cannot be parsed, and a
//! rejected value never rewrites the file.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::RolodexConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

impl ConfigAction {
    fn key(&self) -> Option<&str> {
        match self {
            ConfigAction::ShowAll => None,
            ConfigAction::ShowKey(key) | ConfigAction::Set(key, _) => Some(key),
        }
    }
}

fn unknown_key(key: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        RolodexConfig::keys().join(", ")
    )));
    result
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    if let Some(key) = action.key() {
        if !RolodexConfig::keys().iter().any(|known| *known == key) {
            return Ok(unknown_key(key));
        }
    }

    let mut config = RolodexConfig::load(config_dir)?;
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if let Some(value) = config.get(&key) {
                result.add_message(CmdMessage::info(value));
            }
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            tracing::debug!(%key, dir = %config_dir.display(), "config updated");
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }
    Ok(result.with_config(config))
}
