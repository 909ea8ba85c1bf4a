//! Infrastructure for the inventory store (persistence adapters).

pub mod inventory_store;

pub use inventory_store::{
    DEFAULT_INVENTORY_PATH, InMemoryRepository, InventoryRepository, JsonFileRepository,
    PersistenceError,
};
