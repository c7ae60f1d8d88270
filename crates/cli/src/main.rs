use clap::Parser;
use scan_tree_cli::args::Args;
use scan_tree_cli::config::Config;
use scan_tree_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from(args);

    let result = scan_tree_engine::run(&config);
    for (path, err) in &result.errors {
        eprintln!("Error scanning {}: {err}", path.display());
    }

    presentation::print_report(&result.entries, &config);

    if config.strict && !result.errors.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
