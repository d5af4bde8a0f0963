use std::io::Write;

use bowme_core::candidates::CandidateTable;
use bowme_core::error::{Error, Result};
use crossterm::style::{style, Stylize};

/// Prints each match as the keyword in dark blue (ANSI color 4) followed by the indented command.
///
/// Colors are left out when `NO_COLOR` is set.
pub fn print_matches<W: Write>(out: &mut W, matched: &CandidateTable) -> Result<()> {
    for (key, command) in matched {
        writeln!(out, "{}", style(key).dark_blue()).map_err(Error::Stdio)?;
        writeln!(out, "  {command}").map_err(Error::Stdio)?;
    }

    Ok(())
}

pub fn print_message<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{message}").map_err(Error::Stdio)
}
