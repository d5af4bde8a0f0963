//! Bowme Core Library
//!
//! This crate provides the core functionality for bowme, a tool that helps
//! recall shell commands you only half remember. Commands are kept as
//! `keyword,command` pairs in a local CSV store, which is seeded from a
//! shared remote document on first use.
//!
//! # Key Features
//!
//! - **Local Store**: Seed, reload, append to and read the CSV store
//! - **Remote Documents**: Fetch the gist-style JSON document that wraps the CSV
//! - **Candidate Index**: Fold store records into a keyword lookup
//! - **Matching**: Case-insensitive alternation search over keywords
//! - **Error Handling**: Typed errors for every failure the CLI reports
//!
//! # Examples
//!
//! Searching an existing store:
//!
//! ```no_run
//! use bowme_core::candidates::build_index;
//! use bowme_core::file_handling::LocalStore;
//! use bowme_core::matcher::{find_matches, MatchMode};
//!
//! let store = LocalStore::new("/home/me/.bowme");
//! let table = build_index(store.read_all()?);
//! for (key, command) in find_matches("git log", &table, MatchMode::Regex)? {
//!     println!("{key}: {command}");
//! }
//! # Ok::<(), bowme_core::error::Error>(())
//! ```

pub mod candidates;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod matcher;
pub mod remote;
