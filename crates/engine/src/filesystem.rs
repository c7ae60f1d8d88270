use crate::config::{Config, IgnoreSet};
use crate::entry::{Entry, RunResult};
use crate::error::EngineError;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Sequential pre-order walk of the tree rooted at `config.walk.root`.
///
/// Ignored directory names are pruned structurally: the walker never
/// descends into them, so their subtrees are neither visited nor yielded.
/// Traversal errors do not abort the walk; they are collected alongside the
/// entries in the returned `RunResult`.
pub fn walk(config: &Config) -> RunResult {
    let mut result = RunResult::default();
    let root = &config.walk.root;

    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            result
                .errors
                .push((root.clone(), EngineError::NotADirectory(root.clone())));
            return result;
        }
        Err(source) => {
            result.errors.push((
                root.clone(),
                EngineError::RootAccess {
                    path: root.clone(),
                    source,
                },
            ));
            return result;
        }
    }

    let mut walker = WalkDir::new(root).follow_links(config.walk.follow_links);
    if let Some(depth) = config.walk.max_depth {
        walker = walker.max_depth(depth);
    }

    // Files rank ahead of subdirectories so every directory header is
    // followed by its direct files, with subtree blocks after them.
    let sort_names = config.walk.sort;
    let walker = walker.sort_by(move |a, b| {
        dir_rank(a).cmp(&dir_rank(b)).then_with(|| {
            if sort_names {
                a.file_name().cmp(b.file_name())
            } else {
                Ordering::Equal
            }
        })
    });

    let ignore = config.ignore.clone();
    for item in walker.into_iter().filter_entry(move |e| keep_entry(e, &ignore)) {
        match item {
            Ok(entry) => result.entries.push(to_record(&entry)),
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                result.errors.push((path, EngineError::Walk(err)));
            }
        }
    }

    result
}

fn dir_rank(entry: &DirEntry) -> u8 {
    u8::from(entry.file_type().is_dir())
}

fn keep_entry(entry: &DirEntry, ignore: &IgnoreSet) -> bool {
    // The root is never pruned; only subdirectory names are matched.
    if entry.depth() == 0 {
        return true;
    }
    if entry.file_type().is_dir() && ignore.contains(entry.file_name()) {
        log::debug!("pruning {}", entry.path().display());
        return false;
    }
    true
}

fn to_record(entry: &DirEntry) -> Entry {
    let name = entry.file_name().to_string_lossy().into_owned();
    if entry.file_type().is_dir() {
        Entry::dir(entry.depth(), name)
    } else {
        Entry::file(entry.depth(), name)
    }
}
