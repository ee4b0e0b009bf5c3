use colored::Colorize;
use rolodex::commands::{CmdMessage, MessageLevel};
use rolodex::config::RolodexConfig;
use rolodex::error::RolodexError;
use rolodex::model::Record;
use std::io::{self, Write};

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn write_error<W: Write>(out: &mut W, error: &RolodexError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

/// Numbered phone listing used wherever the user picks a phone by index.
pub(super) fn write_phones<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "'{}' phones:", record.name().bold())?;
    for (i, phone) in record.phones().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, phone)?;
    }
    Ok(())
}

pub(super) fn write_config<W: Write>(out: &mut W, config: &RolodexConfig) -> io::Result<()> {
    for key in RolodexConfig::keys() {
        if let Some(value) = config.get(key) {
            writeln!(out, "{} = {}", key, value)?;
        }
    }
    Ok(())
}
