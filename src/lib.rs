//! `bugtrack` - Bug tracker CLI library
//!
//! This crate provides the command-line layer for the `bt` tool on top of
//! [`bugtrack_lib`].
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Data directory discovery and `config.yaml`
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup
//!
//! Bug data types, storage and the query engine are re-exported from
//! `bugtrack_lib`.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;

pub use bugtrack_lib::*;
pub use cli::run;
