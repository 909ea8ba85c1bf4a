//! Demonstration sequence run by `stockkeep demo`.

use stockkeep_core::InventoryResult;
use stockkeep_infra::InventoryRepository;
use stockkeep_inventory::Inventory;

/// Load, run the demonstration operations, save.
///
/// Load and save failures propagate; failures inside the operations are
/// logged and swallowed so the save still happens.
pub fn run<R: InventoryRepository>(
    repo: &R,
    inventory: &mut Inventory,
    low_threshold: i64,
) -> anyhow::Result<()> {
    repo.load_into(inventory)?;

    if let Err(e) = operations(inventory, low_threshold) {
        tracing::error!("Demo operations failed: {e}");
    }

    repo.save(inventory)?;
    Ok(())
}

fn operations(inventory: &mut Inventory, low_threshold: i64) -> InventoryResult<()> {
    inventory.add("apple", 10)?;
    inventory.add("banana", 2)?;
    inventory.remove("apple", 3)?;
    tracing::info!("Apple stock: {}", inventory.quantity("apple")?);

    let low: Vec<String> = inventory
        .low_items(low_threshold)?
        .into_iter()
        .map(|item| item.into_inner())
        .collect();
    tracing::info!("Low items: {low:?}");
    Ok(())
}
