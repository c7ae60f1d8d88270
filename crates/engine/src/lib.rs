// crates/engine/src/lib.rs
pub mod config;
pub mod entry;
pub mod error;
pub mod filesystem;
pub mod options;

use crate::config::Config;
use crate::entry::RunResult;

/// Walk the directory tree described by `config`.
///
/// Returns a `RunResult` containing the collected entry records and any
/// errors encountered during traversal. Entries and errors are reported
/// side by side; the caller decides whether errors are printed, ignored,
/// or turned into a failing exit.
pub fn run(config: &Config) -> RunResult {
    filesystem::walk(config)
}
