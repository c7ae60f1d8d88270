use crate::options::OutputFormat;
use derive_builder::Builder;
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Directory names pruned by default: version-control metadata, dependency
/// caches, build output and editor configuration.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".vscode",
    "__pycache__",
    ".idea",
];

/// Set of directory base names excluded from traversal.
///
/// Matching is exact base-name equality and applies to directories only; a
/// file sharing a name with an ignored directory is kept.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    names: HashSet<OsString>,
}

impl IgnoreSet {
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<OsString>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        let mut set = Self::empty();
        for name in DEFAULT_IGNORE_DIRS {
            set.insert(*name);
        }
        set
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    /// Sort names within each directory for reproducible output. Off by
    /// default; entries otherwise keep directory-enumeration order.
    #[builder(default)]
    pub sort: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: None,
            follow_links: false,
            sort: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub ignore: IgnoreSet,

    #[builder(default = "OutputFormat::Tree")]
    pub format: OutputFormat,
    /// Strict mode: a traversal error turns into a failing exit. Default is
    /// report on stderr and continue.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            ignore: IgnoreSet::default(),
            format: OutputFormat::Tree,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ignore_set_covers_known_noise_dirs() {
        let set = IgnoreSet::default();
        assert_eq!(set.len(), DEFAULT_IGNORE_DIRS.len());
        assert!(set.contains(OsStr::new("node_modules")));
        assert!(set.contains(OsStr::new(".git")));
        assert!(!set.contains(OsStr::new("src")));
    }

    #[test]
    fn empty_ignore_set_matches_nothing() {
        let set = IgnoreSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(OsStr::new("node_modules")));
    }

    #[test]
    fn insert_extends_the_set() {
        let mut set = IgnoreSet::default();
        set.insert("vendor");
        assert!(set.contains(OsStr::new("vendor")));
    }

    #[test]
    fn config_builder_fills_defaults() {
        let config = ConfigBuilder::default().build().unwrap();
        assert_eq!(config.walk.root, PathBuf::from("."));
        assert!(!config.walk.sort);
        assert!(!config.strict);
        assert_eq!(config.format, OutputFormat::Tree);
    }
}
