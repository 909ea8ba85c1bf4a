//! Inventory store.
//!
//! Business rules for item quantities, implemented as in-memory logic with an
//! injected observer for logging (no file IO here; see `stockkeep-infra`).

pub mod event;
pub mod levels;
pub mod observer;
pub mod store;

pub use event::{StockAdded, StockDepleted, StockEvent, StockReduced, StockReplaced};
pub use levels::StockLevels;
pub use observer::{InventoryObserver, NoopObserver, TracingObserver};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};
