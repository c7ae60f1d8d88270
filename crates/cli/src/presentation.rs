// crates/cli/src/presentation.rs
use scan_tree_engine::config::Config;
use scan_tree_engine::entry::{Entry, EntryKind};
use scan_tree_engine::options::OutputFormat;

/// Indent step per nesting level.
const INDENT: &str = "    ";

pub const BANNER_START: &str = "--- Project structure ---";
pub const BANNER_END: &str = "-------------------------";

pub fn print_report(entries: &[Entry], config: &Config) {
    match config.format {
        OutputFormat::Json => print_json(entries),
        OutputFormat::Tree => print_tree(entries),
    }
}

/// Banner-framed indented tree: directories as `[name]`, files as the bare
/// name, one line per entry. An empty walk prints the two banners alone.
fn print_tree(entries: &[Entry]) {
    println!("{BANNER_START}");
    for entry in entries {
        println!("{}", render_line(entry));
    }
    println!("{BANNER_END}");
}

fn render_line(entry: &Entry) -> String {
    let indent = INDENT.repeat(entry.depth);
    match entry.kind {
        EntryKind::Dir => format!("{indent}[{}]", entry.name),
        EntryKind::File => format!("{indent}{}", entry.name),
    }
}

fn print_json(entries: &[Entry]) {
    if let Ok(json) = serde_json::to_string_pretty(entries) {
        println!("{json}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_bracketed() {
        assert_eq!(render_line(&Entry::dir(0, "src")), "[src]");
    }

    #[test]
    fn files_are_bare_names() {
        assert_eq!(render_line(&Entry::file(1, "main.rs")), "    main.rs");
    }

    #[test]
    fn indent_is_four_spaces_per_level() {
        assert_eq!(render_line(&Entry::dir(2, "sub")), "        [sub]");
        assert_eq!(render_line(&Entry::file(3, "deep.txt")), "            deep.txt");
    }

    #[test]
    fn banners_share_their_width() {
        assert_eq!(BANNER_START.len(), BANNER_END.len());
    }
}
