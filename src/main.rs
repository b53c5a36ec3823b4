use anyhow::Result;

use padel_pass::cli::Command;
use padel_pass::{handle_check, handle_completions, handle_serve, handle_show, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Serve { port, data } => handle_serve(port, &data),
        Command::Show {
            page,
            data,
            player,
            query,
            sort,
            theme,
        } => handle_show(
            &page,
            &data,
            player.as_deref(),
            query.as_deref(),
            sort.as_deref(),
            theme.as_deref(),
        ),
        Command::Check { data } => handle_check(&data),
        Command::Completions { shell } => handle_completions(shell),
    }
}
