//! Command-line surface.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use stockkeep_infra::InventoryRepository;
use stockkeep_inventory::Inventory;

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(name = "stockkeep", version, about = "Track item quantities in a JSON file")]
pub struct Cli {
    /// Inventory file (overrides STOCKKEEP_FILE).
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Load, run a short demonstration sequence, save (the default).
    Demo,
    /// Add stock for an item.
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove stock from an item.
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Print the quantity of an item.
    Qty { item: String },
    /// Print items below a threshold, one per line.
    Low {
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<i64>,
    },
    /// Log the items report.
    Report,
}

/// Execute one command against `repo`. Output meant for the user goes to `out`.
pub fn run<R, W>(
    command: Command,
    settings: &Settings,
    repo: &R,
    inventory: &mut Inventory,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: InventoryRepository,
    W: Write,
{
    match command {
        Command::Demo => return crate::demo::run(repo, inventory, settings.low_threshold),
        Command::Add { item, qty } => {
            load(repo, inventory)?;
            let line = inventory.add(&item, qty)?;
            save(repo, inventory)?;
            writeln!(out, "{line}")?;
        }
        Command::Remove { item, qty } => {
            load(repo, inventory)?;
            inventory.remove(&item, qty)?;
            save(repo, inventory)?;
        }
        Command::Qty { item } => {
            load(repo, inventory)?;
            writeln!(out, "{}", inventory.quantity(&item)?)?;
        }
        Command::Low { threshold } => {
            load(repo, inventory)?;
            for item in inventory.low_items(threshold.unwrap_or(settings.low_threshold))? {
                writeln!(out, "{item}")?;
            }
        }
        Command::Report => {
            load(repo, inventory)?;
            inventory.print_report();
        }
    }
    Ok(())
}

fn load<R: InventoryRepository>(repo: &R, inventory: &mut Inventory) -> anyhow::Result<()> {
    repo.load_into(inventory)
        .with_context(|| format!("loading {}", repo.location()))
}

fn save<R: InventoryRepository>(repo: &R, inventory: &Inventory) -> anyhow::Result<()> {
    repo.save(inventory)
        .with_context(|| format!("saving {}", repo.location()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stockkeep_infra::InMemoryRepository;
    use stockkeep_inventory::NoopObserver;

    use super::*;

    fn exec(repo: &InMemoryRepository, command: Command) -> anyhow::Result<String> {
        let mut inv = Inventory::with_observer(Arc::new(NoopObserver));
        let mut out = Vec::new();
        run(command, &Settings::default(), repo, &mut inv, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn add(item: &str, qty: i64) -> Command {
        Command::Add { item: item.to_string(), qty }
    }

    #[test]
    fn add_persists_and_prints_line() {
        let repo = InMemoryRepository::new();
        let out = exec(&repo, add("apple", 10)).unwrap();
        assert!(out.trim_end().ends_with(": Added 10 of apple"));
        assert_eq!(repo.snapshot().unwrap().get("apple"), Some(10));
    }

    #[test]
    fn qty_and_low_read_persisted_state() {
        let repo = InMemoryRepository::new();
        exec(&repo, add("apple", 10)).unwrap();
        exec(&repo, add("banana", 2)).unwrap();
        exec(&repo, Command::Remove { item: "apple".into(), qty: 3 }).unwrap();

        assert_eq!(exec(&repo, Command::Qty { item: "apple".into() }).unwrap(), "7\n");
        assert_eq!(exec(&repo, Command::Low { threshold: None }).unwrap(), "banana\n");
        assert_eq!(exec(&repo, Command::Low { threshold: Some(10) }).unwrap(), "apple\nbanana\n");
    }

    #[test]
    fn failures_are_not_saved() {
        let repo = InMemoryRepository::new();
        let err = exec(&repo, Command::Remove { item: "nonexistent".into(), qty: 1 }).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(repo.snapshot().is_none());

        assert!(exec(&repo, add("x", -1)).is_err());
        assert!(repo.snapshot().is_none());
    }

    #[test]
    fn parses_negative_quantities() {
        let cli = Cli::try_parse_from(["stockkeep", "add", "x", "-1"]).unwrap();
        assert_eq!(cli.command, Some(add("x", -1)));

        let args = ["stockkeep", "--file", "a.json", "low", "--threshold", "3"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("a.json")));
        assert_eq!(cli.command, Some(Command::Low { threshold: Some(3) }));

        let cli = Cli::try_parse_from(["stockkeep"]).unwrap();
        assert_eq!(cli.command, None);
    }
}
