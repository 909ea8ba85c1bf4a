use thiserror::Error;

use stockkeep_inventory::{Inventory, StockLevels};

/// Failure to read or write persisted inventory.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The stored document is not a JSON object of item -> integer quantity.
    #[error("failed to parse {location}: {reason}")]
    Parse { location: String, reason: String },

    /// The underlying read or write failed.
    #[error("io failure on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    pub fn parse(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            location: location.into(),
            reason: reason.into(),
        }
    }

    pub fn io(location: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Where an inventory lives between runs.
///
/// Implementations only move [`StockLevels`] in and out; the provided
/// `load_into` / `save` methods wire them to a live [`Inventory`].
pub trait InventoryRepository {
    /// Human-readable location for logs and errors (a path, "memory", ...).
    fn location(&self) -> String;

    /// Read the stored levels. A missing document yields empty levels.
    fn read(&self) -> Result<StockLevels, PersistenceError>;

    /// Replace the stored document with `levels`.
    fn write(&self, levels: &StockLevels) -> Result<(), PersistenceError>;

    /// Replace the whole inventory with the stored levels.
    ///
    /// On failure the inventory is left exactly as it was.
    fn load_into(&self, inventory: &mut Inventory) -> Result<(), PersistenceError> {
        let levels = self.read()?;
        tracing::info!("Loaded {} items from {}", levels.len(), self.location());
        inventory.replace(levels);
        Ok(())
    }

    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        self.write(inventory.levels())?;
        tracing::info!("Saved {} items to {}", inventory.len(), self.location());
        Ok(())
    }
}
