//! `stockkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod error;
pub mod item;
pub mod quantity;

pub use error::{InventoryError, InventoryResult};
pub use item::ItemName;
pub use quantity::{ensure_non_negative, ensure_positive};
