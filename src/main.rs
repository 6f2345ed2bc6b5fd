use clap::Parser;

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli::run(cli) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}
