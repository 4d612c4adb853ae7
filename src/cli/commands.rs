//! Command dispatch
//!
//! Each command writes to an output sink so it can be run against a buffer.

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument, warn};

use crate::application::summary::{balance_verdict, equality_verdict, Summary};
use crate::application::{run_demo, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{parse_mobile, MobileTreeConvert};

/// Load the settings `command` runs with.
///
/// The demo does not use settings, so a broken config falls back to the
/// defaults there instead of failing the run.
pub fn resolve_settings(
    command: Option<&Commands>,
    config_path: Option<&Path>,
) -> CliResult<Settings> {
    match Settings::load_from(config_path) {
        Ok(settings) => Ok(settings),
        Err(e) if matches!(command, None | Some(Commands::Demo)) => {
            warn!("Ignoring settings: {}", e);
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// `Some(false)` when color is switched off; otherwise colored decides
/// from NO_COLOR, CLICOLOR and the terminal.
pub fn color_override(settings: &Settings) -> Option<bool> {
    (!settings.color).then_some(false)
}

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        None | Some(Commands::Demo) => cmd_demo(&mut out),
        Some(Commands::Show { mobile, tree }) => write_show(&mut out, mobile, *tree, settings),
        Some(Commands::Mirror { mobile }) => write_mirror(&mut out, mobile),
        Some(Commands::Compare { first, second }) => write_compare(&mut out, first, second),
        Some(Commands::Config { command }) => cmd_config(command, settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut out);
            Ok(())
        }
    }
}

#[instrument(skip(out))]
fn cmd_demo<W: Write>(out: &mut W) -> CliResult<()> {
    let report = run_demo(out)?;
    debug!(?report, "demo finished");
    Ok(())
}

/// Print the queries on one mobile; `tree` or the `tree` setting adds the tree view.
#[instrument(skip(out, settings))]
pub fn write_show<W: Write>(
    out: &mut W,
    notation: &str,
    tree: bool,
    settings: &Settings,
) -> CliResult<()> {
    let mobile = parse_mobile(notation)?;
    let summary = Summary::of(&mobile);
    debug!(?summary, "parsed mobile");

    // every line but the verdict is plain data
    let mut lines = summary.lines();
    lines.pop();
    for line in &lines {
        writeln!(out, "{}", line).io_context("write summary")?;
    }
    output::write_verdict(out, summary.balanced, balance_verdict(summary.balanced))
        .io_context("write balance verdict")?;

    if tree || settings.tree {
        output::write_header(out, "Tree:").io_context("write tree header")?;
        write!(out, "{}", mobile.to_tree_string()).io_context("write tree")?;
    }
    Ok(())
}

#[instrument(skip(out))]
pub fn write_mirror<W: Write>(out: &mut W, notation: &str) -> CliResult<()> {
    let mut mobile = parse_mobile(notation)?;
    mobile.mirror();
    writeln!(out, "{}", mobile).io_context("write mirrored mobile")?;
    Ok(())
}

#[instrument(skip(out))]
pub fn write_compare<W: Write>(out: &mut W, first: &str, second: &str) -> CliResult<()> {
    let a = parse_mobile(first)?;
    let b = parse_mobile(second)?;
    let equal = a.structural_eq(&b);
    output::write_verdict(out, equal, equality_verdict(equal)).io_context("write verdict")?;
    writeln!(out, "hash: {} {}", a.hash_code(), b.hash_code()).io_context("write hashes")?;
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(settings.to_toml()?.trim_end()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available"),
        },
    }
    Ok(())
}
