use crate::error::EngineError;
use serde::Serialize;
use std::path::PathBuf;

/// Kind of filesystem object yielded by the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One record of the walk: what was found, how deep, and its base name.
///
/// Depth is the number of path separators between the entry and the walk
/// root. The root directory itself is depth 0; its files are depth 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub depth: usize,
    pub kind: EntryKind,
    pub name: String,
}

impl Entry {
    pub fn dir(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: EntryKind::Dir,
            name: name.into(),
        }
    }

    pub fn file(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: EntryKind::File,
            name: name.into(),
        }
    }
}

/// Walk output: collected entries plus any per-path traversal errors.
#[derive(Debug, Default)]
pub struct RunResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<(PathBuf, EngineError)>,
}
