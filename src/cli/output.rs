//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically; the `color`
//! setting can only switch color off.

use std::io::{self, Write};

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Write a verdict line, green when it holds and red otherwise
pub fn write_verdict<W: Write>(
    out: &mut W,
    holds: bool,
    msg: &(impl std::fmt::Display + ?Sized),
) -> io::Result<()> {
    let text = msg.to_string();
    if holds {
        writeln!(out, "{}", text.green())
    } else {
        writeln!(out, "{}", text.red())
    }
}

/// Write section header (cyan bold)
pub fn write_header<W: Write>(out: &mut W, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(out, "{}", msg.to_string().cyan().bold())
}
