pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod store;
pub mod view;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::check::CheckService;
use crate::services::server::ServerService;
use crate::store::Store;
use crate::view::ViewContext;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, data: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let snapshot = Store::new(data).load_snapshot()?;
        let service = ServerService::new(port, config, snapshot);
        service.run().await
    })
}

pub fn handle_show(
    page: &str,
    data: &Path,
    player: Option<&str>,
    query: Option<&str>,
    sort: Option<&str>,
    theme: Option<&str>,
) -> Result<()> {
    let config = AppConfig::new();
    let snapshot = Store::new(data).load_snapshot()?;
    let ctx = ViewContext::new(theme, &snapshot.club, &config);

    let json = match page {
        "home" => serde_json::to_string_pretty(&view::home::build(&snapshot, &config, &ctx))?,
        "pass" => serde_json::to_string_pretty(&view::pass::build(&snapshot, player, &ctx)?)?,
        "events" => serde_json::to_string_pretty(&view::events::build(
            &snapshot,
            query.unwrap_or(""),
            &ctx,
        ))?,
        "players" => serde_json::to_string_pretty(&view::players::build(
            &snapshot,
            query.unwrap_or(""),
            sort,
            &ctx,
        ))?,
        "player" => {
            serde_json::to_string_pretty(&view::player::build(&snapshot, player, &config, &ctx)?)?
        }
        other => anyhow::bail!("Unknown page: {other}"),
    };

    println!("{json}");
    Ok(())
}

pub fn handle_check(data: &Path) -> Result<()> {
    let service = CheckService::new(data);
    service.run()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
