use clap::Parser;
use roster::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = roster::tui::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
