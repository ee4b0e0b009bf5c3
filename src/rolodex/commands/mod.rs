//! # Commands
//!
//! Business logic for each user-facing operation. Commands work on an
//! [`AddressBook`](crate::book::AddressBook) passed in by the caller and return a
//! [`CmdResult`]: the records they touched or listed, plus messages for the user.
//!
//! This is where caller-level policy lives, on top of the permissive record and
//! book operations:
//! - phones already present on a contact are not added twice,
//! - a phone edit may not duplicate another phone of the same contact,
//! - deleting a missing contact is a warning, not an error.
//!
//! Commands never print; the CLI decides how messages look.

use crate::config::RolodexConfig;
use crate::model::Record;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod phones;
pub mod rename;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Record>,
    pub listed: Vec<Record>,
    pub config: Option<RolodexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_config(mut self, config: RolodexConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
