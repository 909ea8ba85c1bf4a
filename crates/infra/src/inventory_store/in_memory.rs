use std::sync::RwLock;

use stockkeep_inventory::StockLevels;

use super::r#trait::{InventoryRepository, PersistenceError};

/// In-memory inventory repository.
///
/// Intended for tests/dev. Starts out "missing" (reads as empty) until the
/// first write.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    stored: RwLock<Option<StockLevels>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written levels, if anything was written.
    pub fn snapshot(&self) -> Option<StockLevels> {
        self.stored.read().ok().and_then(|s| s.clone())
    }

    fn poisoned(&self) -> PersistenceError {
        PersistenceError::io(self.location(), std::io::Error::other("lock poisoned"))
    }
}

impl InventoryRepository for InMemoryRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn read(&self) -> Result<StockLevels, PersistenceError> {
        let stored = self.stored.read().map_err(|_| self.poisoned())?;
        Ok(stored.clone().unwrap_or_default())
    }

    fn write(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        let mut stored = self.stored.write().map_err(|_| self.poisoned())?;
        *stored = Some(levels.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stockkeep_inventory::{Inventory, NoopObserver};

    use super::*;

    #[test]
    fn empty_until_written() {
        let repo = InMemoryRepository::new();
        assert!(repo.snapshot().is_none());
        assert!(repo.read().unwrap().is_empty());
    }

    #[test]
    fn save_and_reload() {
        let repo = InMemoryRepository::new();
        let mut inv = Inventory::with_observer(Arc::new(NoopObserver));
        inv.add("bolt", 40).unwrap();
        repo.save(&inv).unwrap();

        let mut other = Inventory::with_observer(Arc::new(NoopObserver));
        repo.load_into(&mut other).unwrap();
        assert_eq!(other.quantity("bolt").unwrap(), 40);
        assert_eq!(repo.snapshot().map(|l| l.len()), Some(1));
    }
}
