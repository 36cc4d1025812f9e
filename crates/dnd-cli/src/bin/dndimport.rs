use dnd_cli::cli::{self, ImportCli};
use dnd_core::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    let cli: ImportCli = cli::parse_or_exit();
    if let Err(err) = cli.run() {
        eprintln!("dndimport error: {:#}", err);
        std::process::exit(1);
    }
}
