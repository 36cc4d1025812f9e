use dnd_cli::cli::{self, CheckCli};
use dnd_core::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    let cli: CheckCli = cli::parse_or_exit();
    if let Err(err) = cli.run() {
        eprintln!("dndcheck error: {:#}", err);
        std::process::exit(1);
    }
}
