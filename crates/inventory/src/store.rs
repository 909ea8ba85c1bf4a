use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use stockkeep_core::{
    InventoryError, InventoryResult, ItemName, ensure_non_negative, ensure_positive,
};

use crate::event::{StockAdded, StockDepleted, StockEvent, StockReduced, StockReplaced};
use crate::levels::StockLevels;
use crate::observer::{InventoryObserver, TracingObserver};

/// Threshold used by the low-stock report when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// The inventory store: item quantities plus the observer that hears about
/// every change.
///
/// Owned by the caller and passed by reference; there is no process-wide
/// instance. Every operation either completes or leaves the levels untouched.
pub struct Inventory {
    levels: StockLevels,
    observer: Arc<dyn InventoryObserver>,
}

impl core::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Inventory").field("levels", &self.levels).finish_non_exhaustive()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Empty inventory reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn InventoryObserver>) -> Self {
        Self {
            levels: StockLevels::new(),
            observer,
        }
    }

    pub fn levels(&self) -> &StockLevels {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.levels.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.levels.iter()
    }

    /// Add `qty` of `item` at the current time. See [`Inventory::add_at`].
    pub fn add(&mut self, item: &str, qty: i64) -> InventoryResult<String> {
        self.add_at(item, qty, Utc::now())
    }

    /// Add `qty` of `item`, creating the entry if needed.
    ///
    /// Returns the audit line `"<timestamp>: Added <qty> of <item>"`. Adding
    /// zero to an absent item stores nothing.
    pub fn add_at(
        &mut self,
        item: &str,
        qty: i64,
        occurred_at: DateTime<Utc>,
    ) -> InventoryResult<String> {
        let (item, qty) = match Self::validate_add(item, qty) {
            Ok(v) => v,
            Err(e) => return self.reject("add", e),
        };

        let current = self.levels.get(item.as_str()).unwrap_or(0);
        let Some(total) = current.checked_add(qty) else {
            let error = InventoryError::invalid_argument(format!(
                "adding {qty} to '{item}' overflows (current {current})"
            ));
            return self.reject("add", error);
        };

        self.levels.set(item.clone(), total);

        let line = format!(
            "{}: Added {} of {}",
            occurred_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            qty,
            item
        );
        self.observer.on_event(&StockEvent::Added(StockAdded {
            item,
            quantity: qty,
            total,
            occurred_at,
        }));
        Ok(line)
    }

    /// Remove `qty` of `item`. Removing at least the stored quantity deletes
    /// the item; quantities never go negative.
    pub fn remove(&mut self, item: &str, qty: i64) -> InventoryResult<()> {
        let (item, qty) = match Self::validate_remove(item, qty) {
            Ok(v) => v,
            Err(e) => return self.reject("remove", e),
        };

        let Some(current) = self.levels.get(item.as_str()) else {
            return self.reject("remove", InventoryError::not_found(item.into_inner()));
        };

        let occurred_at = Utc::now();
        let event = if qty >= current {
            self.levels.take(item.as_str());
            StockEvent::Depleted(StockDepleted { item, occurred_at })
        } else {
            let remaining = current - qty;
            self.levels.set(item.clone(), remaining);
            StockEvent::Reduced(StockReduced {
                item,
                quantity: qty,
                remaining,
                occurred_at,
            })
        };

        self.observer.on_event(&event);
        Ok(())
    }

    /// Current quantity of `item`.
    pub fn quantity(&self, item: &str) -> InventoryResult<i64> {
        match self.levels.get(item) {
            Some(qty) => Ok(qty),
            None => self.reject("quantity", InventoryError::not_found(item)),
        }
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_items(&self, threshold: i64) -> InventoryResult<Vec<ItemName>> {
        if let Err(e) = ensure_non_negative("threshold", threshold) {
            return self.reject("low_items", e);
        }
        Ok(self
            .levels
            .iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item.clone())
            .collect())
    }

    /// Swap the whole inventory for `levels` (used by loading).
    pub fn replace(&mut self, levels: StockLevels) {
        let items = levels.len();
        self.levels = levels;
        self.observer.on_event(&StockEvent::Replaced(StockReplaced {
            items,
            occurred_at: Utc::now(),
        }));
    }

    /// One `"  <item> -> <qty>"` line per item, insertion order.
    pub fn report_lines(&self) -> Vec<String> {
        self.levels
            .iter()
            .map(|(item, qty)| format!("  {item} -> {qty}"))
            .collect()
    }

    /// Send the items report to the observer.
    pub fn print_report(&self) {
        self.observer.on_report(&self.report_lines());
    }

    fn validate_add(item: &str, qty: i64) -> InventoryResult<(ItemName, i64)> {
        let item = ItemName::parse(item)?;
        let qty = ensure_non_negative("qty", qty)?;
        Ok((item, qty))
    }

    fn validate_remove(item: &str, qty: i64) -> InventoryResult<(ItemName, i64)> {
        let item = ItemName::parse(item)?;
        let qty = ensure_positive("qty", qty)?;
        Ok((item, qty))
    }

    fn reject<T>(&self, operation: &'static str, error: InventoryError) -> InventoryResult<T> {
        self.observer.on_rejected(operation, &error);
        Err(error)
    }
}
