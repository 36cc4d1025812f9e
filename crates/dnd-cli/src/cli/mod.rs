//! CLI argument parsing and command handlers for both binaries.

mod check;
mod import;

pub use check::CheckCli;
pub use import::ImportCli;

use clap::Parser;

/// Parses process arguments, printing usage and exiting on error.
///
/// Usage errors exit with status 1; `--help` and `--version` exit with 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests;
