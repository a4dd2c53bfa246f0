//! The `yankr` binary. Everything interesting lives in the library; `cli/`
//! parses arguments and prints results, and this file only maps errors to the
//! process exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
