//! Dispatch of the three things bowme can do: reload the store, append to
//! it, or search it.

use std::io::Write;

use bowme_core::candidates::build_index;
use bowme_core::config::resolve_source_url;
use bowme_core::error::Result;
use bowme_core::file_handling::LocalStore;
use bowme_core::matcher::{find_matches, MatchMode};
use bowme_core::remote::{DocumentFetcher, RemoteSource};
use clap::error::ErrorKind;
use itertools::Itertools;
use log::debug;

use crate::cli_args::Args;
use crate::output::{print_matches, print_message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the store with the document at this location.
    Reload(String),
    /// Add one `index,command` line to the store.
    Append { index: String, command: String },
    /// Print every entry whose keyword matches the query.
    Search(String),
    /// `--index` was given without any command words.
    MissingCommand,
    /// Nothing to search for.
    MissingQuery,
}

impl Action {
    /// Picks the action for the parsed arguments. `--reload` wins over
    /// `--index`; empty flag values count as absent.
    pub fn from_args(args: &Args) -> Self {
        if let Some(reload) = args.reload.as_ref().filter(|r| !r.is_empty()) {
            return Action::Reload(reload.clone());
        }

        if let Some(index) = args.index.as_ref().filter(|i| !i.is_empty()) {
            if args.words.is_empty() {
                return Action::MissingCommand;
            }

            return Action::Append {
                index: index.clone(),
                command: args.words.iter().join(" "),
            };
        }

        if args.words.is_empty() {
            return Action::MissingQuery;
        }

        Action::Search(args.words.iter().join(" "))
    }
}

/// Everything an action needs besides its own arguments.
pub struct Context<'a> {
    pub store: LocalStore,
    pub fetcher: &'a dyn DocumentFetcher,
    /// Used to create the store when a search finds it missing.
    pub default_source: RemoteSource,
    pub match_mode: MatchMode,
}

/// Runs `action`, writing user facing output to `out`.
///
/// # Errors
///
/// Returns the first failure of the action; nothing is retried.
pub fn run<W: Write>(action: &Action, context: &Context, out: &mut W) -> Result<()> {
    match action {
        Action::Reload(location) => {
            let source = RemoteSource::new(
                resolve_source_url(location),
                context.default_source.file_name.clone(),
            );
            context.store.reload(context.fetcher, &source)?;
            print_message(out, &format!("Read .bowme file from {location} !"))
        }
        Action::Append { index, command } => {
            context.store.append(index, command)?;
            print_message(out, &format!("Append to bowme file: {index}:{command}"))
        }
        Action::Search(query) => {
            context
                .store
                .ensure_initialized(context.fetcher, &context.default_source)?;

            let table = build_index(context.store.read_all()?);
            let matched = find_matches(query, &table, context.match_mode)?;
            debug!("{} of {} candidates matched `{}`", matched.len(), table.len(), query);

            print_matches(out, &matched)
        }
        Action::MissingCommand => {
            print_message(out, "Please input what command you want to add.")
        }
        Action::MissingQuery => print_message(out, "Please input what you want to remember!"),
    }
}

/// Process exit status for a failed action. Only `strict` turns a failure
/// into a non-zero status.
pub fn exit_status(strict: bool) -> u8 {
    u8::from(strict)
}

/// Process exit status after clap rejected the command line. Help and
/// version requests stay at 0; usage errors are 0 unless `strict`.
pub fn usage_exit_status(error: &clap::Error, strict: bool) -> u8 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ if strict => 2,
        _ => 0,
    }
}
