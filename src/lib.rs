//! mytools library - MySQL session, date helpers and an append-only log
//!
//! Provides a single-endpoint MySQL session that materializes SELECT results
//! into text tables and narrates mutating statements, month and day-of-month
//! helpers, a plain-text log sink, and the `mytools` command-line front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dates;
pub mod db;
pub mod log_sink;
pub mod output;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
