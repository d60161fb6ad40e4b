//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use buildage_cli::CliError;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    match buildage_cli::run() {
        Ok(()) => {}
        // Clap prints usage itself and exits with 2 (or 0 for --help).
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("buildage: {err}");
            std::process::exit(1);
        }
    }
}
