//! Bowme CLI Library
//!
//! This crate provides the command-line interface for bowme. It turns the
//! parsed arguments into one of three actions (reload, append, search), runs
//! it against the local store and prints the result.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`actions`]: Choosing and running the requested action
//! - [`output`]: Colored printing of matches and messages
//!
//! # Examples
//!
//! The CLI binary (`bowme`) can be used in several ways:
//!
//! ```bash
//! # Search keywords (any word may match)
//! bowme log push
//!
//! # Add a command under a keyword
//! bowme -i tail-log tail -f /var/log/syslog
//!
//! # Replace the local file with a gist
//! bowme -r https://api.github.com/gists/55cddaa1b0c35c26cac0bace2f2b6940
//! ```

pub mod actions;
pub mod cli_args;
pub mod output;
