//! shelfql CLI entry point
//!
//! A thin entrypoint: parse arguments, dispatch to the CLI module, print
//! errors to stderr, exit non-zero on failure. All logic lives in
//! `cli::run`.

use shelfql::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
