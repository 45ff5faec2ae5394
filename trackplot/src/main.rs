mod commands;
mod handlers;
mod output;

use clap::Parser;
use commands::Cli;

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(err) = handlers::handle_command(cli.command) {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
}
