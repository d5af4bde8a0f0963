//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;

/// Environment variable read when neither `--gist-id` nor `BOWME_GIST_ID` is set.
pub const LEGACY_GIST_ID_ENV: &str = "ARE_GIST_ID";

/// Command-line arguments for the `bowme` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use bowme_cli::cli_args::Args;
///
/// let args = Args::parse_from(["bowme", "git", "log"]);
/// assert_eq!(args.words, vec!["git", "log"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "bowme",
    version,
    about = "Help you to find the commands that you remember ambiguously."
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Replace the bowme file with the content of a gist.
    ///
    /// Takes a gist API URL or a bare gist ID. The gist must contain the
    /// bowme CSV file (see `--file-name`).
    #[arg(long, short = 'r', value_name = "URL")]
    pub reload: Option<String>,

    /// The index for a command that is added to the bowme file.
    ///
    /// The remaining words are joined with spaces to form the command.
    #[arg(long, short = 'i', value_name = "INDEX")]
    pub index: Option<String>,

    /// Path to the bowme file.
    ///
    /// If not provided, defaults to `~/.bowme`.
    #[arg(long, short = 's')]
    pub store_path: Option<String>,

    /// Gist used to create the bowme file when it does not exist yet.
    ///
    /// Falls back to `ARE_GIST_ID` when neither this flag nor
    /// `BOWME_GIST_ID` is set.
    #[arg(long, env = "BOWME_GIST_ID")]
    pub gist_id: Option<String>,

    /// Name of the CSV file inside the gist.
    #[arg(long, env = "BOWME_FILE_NAME")]
    pub file_name: Option<String>,

    /// Match search words as plain text instead of regular expressions.
    #[arg(long, short = 'l', action)]
    pub literal: bool,

    /// Exit with a non-zero status when the action fails.
    #[arg(long, action)]
    pub strict: bool,

    /// Keywords to search for, or the command to add when `--index` is given.
    #[arg(trailing_var_arg = true)]
    pub words: Vec<String>,
}

impl Args {
    /// The gist override to use, taking `legacy` (the value of
    /// [`LEGACY_GIST_ID_ENV`]) only when no other override is present.
    /// Blank values count as absent.
    pub fn gist_id_or(&self, legacy: Option<String>) -> Option<String> {
        self.gist_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .or_else(|| legacy.filter(|id| !id.trim().is_empty()))
    }
}

/// Whether `--strict` appears among raw arguments. Used when clap rejected
/// the command line and no [`Args`] exists.
pub fn strict_requested<I, T>(arguments: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<std::ffi::OsStr>,
{
    arguments
        .into_iter()
        .any(|argument| argument.as_ref() == "--strict")
}
