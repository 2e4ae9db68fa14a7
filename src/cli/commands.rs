//! Command dispatch for the `nettree` binary.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::sample::{sample_network, ssd_extension};
use crate::application::services::InventoryService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    if !settings.color {
        output::disable_colors();
    }
    let network_name = cli
        .network
        .clone()
        .unwrap_or_else(|| settings.network_name.clone());
    debug!(network = %network_name, "resolved network name");

    match &cli.command {
        Some(Commands::Show) | None => cmd_show(&network_name),
        Some(Commands::Find { host }) => cmd_find(&network_name, host),
        Some(Commands::Clone { host }) => cmd_clone(&network_name, host),
        Some(Commands::Config { command }) => cmd_config(&settings, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

#[instrument]
fn cmd_show(network_name: &str) -> CliResult<()> {
    let service = InventoryService::new(sample_network(network_name)?);
    output::info(&service.render()?);
    Ok(())
}

#[instrument]
fn cmd_find(network_name: &str, host: &str) -> CliResult<()> {
    let service = InventoryService::new(sample_network(network_name)?);
    let computer = service.find(host)?;
    output::info(&computer);
    Ok(())
}

#[instrument]
fn cmd_clone(network_name: &str, host: &str) -> CliResult<()> {
    let original = InventoryService::new(sample_network(network_name)?);
    let copy = InventoryService::new(original.snapshot()?);

    let added = ssd_extension();
    output::action("Adding to copy", &added);
    copy.update_computer(host, |computer| {
        computer.add_component(added);
    })?;

    output::header("=== Modified copy ===");
    output::info(&copy.render()?);
    output::header("=== Original (unchanged) ===");
    output::info(&original.render()?);

    let before = original.find(host)?.components().len();
    let after = copy.find(host)?.components().len();
    output::success(&format!(
        "{host}: original has {before} components, copy has {after}"
    ));
    Ok(())
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available on this platform"),
        },
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
