use branch_sweep::cli::{execute_command, Cli};
use branch_sweep::utils::logging::init_logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(e) = execute_command(cli) {
        eprintln!("branch-sweep: {}", e);
        std::process::exit(1);
    }
}
