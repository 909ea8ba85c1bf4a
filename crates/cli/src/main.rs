use std::process::ExitCode;

use clap::Parser;

use stockkeep_cli::{Cli, Command, Settings};
use stockkeep_infra::JsonFileRepository;
use stockkeep_inventory::Inventory;

fn main() -> ExitCode {
    stockkeep_observability::init();

    let cli = Cli::parse();
    let settings = Settings::from_env().with_file(cli.file);
    let repo = JsonFileRepository::new(settings.inventory_path.clone());
    let mut inventory = Inventory::new();

    let command = cli.command.unwrap_or(Command::Demo);
    let mut stdout = std::io::stdout().lock();
    match stockkeep_cli::commands::run(command, &settings, &repo, &mut inventory, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
