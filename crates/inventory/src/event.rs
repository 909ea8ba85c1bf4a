use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockkeep_core::ItemName;

/// Event: quantity added to an item (creating it if absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    pub item: ItemName,
    pub quantity: i64,
    pub total: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: quantity removed, some stock remains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReduced {
    pub item: ItemName,
    pub quantity: i64,
    pub remaining: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: removal consumed the whole quantity; the item is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDepleted {
    pub item: ItemName,
    pub occurred_at: DateTime<Utc>,
}

/// Event: the whole inventory was swapped for a loaded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReplaced {
    pub items: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockEvent {
    Added(StockAdded),
    Reduced(StockReduced),
    Depleted(StockDepleted),
    Replaced(StockReplaced),
}

impl StockEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            StockEvent::Added(_) => "inventory.stock.added",
            StockEvent::Reduced(_) => "inventory.stock.reduced",
            StockEvent::Depleted(_) => "inventory.stock.depleted",
            StockEvent::Replaced(_) => "inventory.stock.replaced",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StockEvent::Added(e) => e.occurred_at,
            StockEvent::Reduced(e) => e.occurred_at,
            StockEvent::Depleted(e) => e.occurred_at,
            StockEvent::Replaced(e) => e.occurred_at,
        }
    }
}
