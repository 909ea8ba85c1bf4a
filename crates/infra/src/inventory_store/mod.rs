//! Inventory persistence.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use json_file::{DEFAULT_INVENTORY_PATH, JsonFileRepository};
pub use r#trait::{InventoryRepository, PersistenceError};
