// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use scan_tree_engine::config::{
    Config, ConfigBuilder, IgnoreSet, WalkOptions, WalkOptionsBuilder,
};
use scan_tree_engine::options as engine_options;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mut ignore = if args.no_default_ignore {
            IgnoreSet::empty()
        } else {
            IgnoreSet::default()
        };
        for name in &args.ignore {
            ignore.insert(name.as_str());
        }

        let walk = WalkOptionsBuilder::default()
            .root(args.root)
            .max_depth(args.max_depth)
            .follow_links(args.follow)
            .sort(args.sort)
            .build()
            .expect("Failed to build walk options");

        let format: engine_options::OutputFormat = args.format.into();

        ConfigBuilder::default()
            .walk(walk)
            .ignore(ignore)
            .format(format)
            .strict(args.strict)
            .build()
            .expect("Failed to build config")
    }
}

impl From<options::OutputFormat> for engine_options::OutputFormat {
    fn from(f: options::OutputFormat) -> Self {
        match f {
            options::OutputFormat::Tree => Self::Tree,
            options::OutputFormat::Json => Self::Json,
        }
    }
}
