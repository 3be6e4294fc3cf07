use std::process::exit;

use clap::Parser;

use piet_interpreter::args::Args;

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(e) = piet_interpreter::run(&args) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
