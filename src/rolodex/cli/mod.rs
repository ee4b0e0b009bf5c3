//! # CLI Layer
//!
//! This module is **one possible UI client** for rolodex; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr) and signals
//! - Handles argument parsing and logging setup
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the config directory, config and contacts file
//! - `handle_*()`: Per-command handlers that call the API and print results
//! - [`menu`]: The interactive loop started by `shell` (the default command)
//! - [`interrupt`]: Ctrl+C handling so an interrupted menu still saves
//!
//! Every command that touches contacts opens one session and closes it before
//! returning, so the file is written once per invocation, on every exit path.

mod interrupt;
mod menu;
mod print;

use crate::args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use menu::Menu;
use print::{write_config, write_messages, write_phones};
use rolodex::api::RolodexApi;
use rolodex::book::LoadReport;
use rolodex::commands::config::ConfigAction;
use rolodex::commands::CmdResult;
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "ROLODEX_HOME";

struct AppContext {
    config_dir: PathBuf,
    config: RolodexConfig,
    contacts_file: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        command => with_session(&ctx, command.unwrap_or(Commands::Shell)),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rolodex=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .try_init()
        .ok();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "rolodex", "rolodex")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| RolodexError::Config("Could not determine config dir".into()))?,
    };

    let config = RolodexConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %config_dir.display(), "ignoring unreadable config: {}", e);
        RolodexConfig::default()
    });
    let contacts_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.contacts_file.clone());

    Ok(AppContext {
        config_dir,
        config,
        contacts_file,
    })
}

/// Opens the book, runs one command and closes the book again. The close (and
/// its save) happens even when the command itself failed.
fn with_session(ctx: &AppContext, command: Commands) -> Result<()> {
    let mut api = RolodexApi::open(FileStore::new(&ctx.contacts_file))?;
    report_load(api.load_report(), api.backup_location(), &ctx.contacts_file);

    let outcome = dispatch(ctx, &mut api, command);
    let closed = api.close();
    outcome?;
    closed
}

fn dispatch(ctx: &AppContext, api: &mut RolodexApi<FileStore>, command: Commands) -> Result<()> {
    match command {
        Commands::List => print_result(&api.list_contacts()?, |records| {
            // The listing shares its layout with the menu's "show all".
            print!("{}", rolodex::book::render_records(records));
        }),
        Commands::Show { name } => print_result(&api.show_contact(&name)?, |records| {
            let mut out = io::stdout().lock();
            for record in records {
                write_phones(&mut out, record).ok();
            }
        }),
        Commands::Add { name, phones } => print_messages(&api.create_contact(&name, &phones)?),
        Commands::AddPhone { name, phones } => print_messages(&api.add_phones(&name, &phones)?),
        Commands::EditPhone { name, old, new } => {
            print_messages(&api.edit_phone(&name, &old, &new)?)
        }
        Commands::DeletePhone { name, phone } => print_messages(&api.delete_phone(&name, &phone)?),
        Commands::Delete { name } => print_messages(&api.delete_contact(&name)?),
        Commands::Rename { name, new_name } => {
            print_messages(&api.rename_contact(&name, &new_name)?)
        }
        Commands::Shell => handle_shell(ctx, api),
        Commands::Config { .. } => Ok(()),
    }
}

fn handle_shell(ctx: &AppContext, api: &mut RolodexApi<FileStore>) -> Result<()> {
    if let Err(e) = interrupt::install() {
        tracing::warn!("could not install Ctrl+C handler: {}", e);
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), &interrupt::INTERRUPTED)
        .with_clear_screen(ctx.config.clear_screen)
        .run(api)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = rolodex::commands::config::run(&ctx.config_dir, action)?;
    let mut out = io::stdout().lock();
    if let Some(config) = &result.config {
        write_config(&mut out, config)?;
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn report_load(report: &LoadReport, backup: Option<&str>, path: &Path) {
    if report.missing_header {
        eprintln!(
            "Warning: {} has no Name;Phone header, starting with an empty address book",
            path.display()
        );
    }
    for row in &report.skipped {
        eprintln!("Warning: skipped {}", row);
    }
    if report.overwritten > 0 {
        eprintln!(
            "Warning: {} duplicate row(s) replaced by later rows with the same name",
            report.overwritten
        );
    }
    if let Some(backup) = backup {
        eprintln!("Warning: original contacts file kept at {}", backup);
    }
}

fn print_result<F>(result: &CmdResult, show: F) -> Result<()>
where
    F: FnOnce(&[rolodex::model::Record]),
{
    if !result.listed.is_empty() {
        show(&result.listed);
    }
    print_messages(result)
}

fn print_messages(result: &CmdResult) -> Result<()> {
    let mut out = io::stdout().lock();
    write_messages(&mut out, &result.messages)?;
    out.flush()?;
    Ok(())
}
