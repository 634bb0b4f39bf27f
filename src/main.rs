use clap::Parser;
use mytasks::cli::commands::Cli;
use mytasks::cli::handlers;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand → launch TUI
        None => mytasks::tui::run(cli.data_dir.as_deref()),
        Some(command) => handlers::dispatch(command, cli.json, cli.data_dir.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
