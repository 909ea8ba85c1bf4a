use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use stockkeep_core::{InventoryError, InventoryResult, ItemName};

/// Item quantities in insertion order.
///
/// Pure data: no observers, no timestamps. Items at zero are never stored, so
/// every quantity here is strictly positive. Serializes as a JSON-style map
/// keyed by item name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLevels {
    entries: IndexMap<ItemName, i64>,
}

impl StockLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build levels from `(name, quantity)` pairs, e.g. a parsed file.
    ///
    /// Negative quantities are rejected, zero quantities are dropped, and a
    /// repeated name keeps its first position but takes the last quantity.
    pub fn from_pairs<I>(pairs: I) -> InventoryResult<Self>
    where
        I: IntoIterator<Item = (ItemName, i64)>,
    {
        let pairs = pairs.into_iter();
        let mut levels = Self {
            entries: IndexMap::with_capacity(pairs.size_hint().0),
        };
        for (item, quantity) in pairs {
            if quantity < 0 {
                return Err(InventoryError::invalid_argument(format!(
                    "quantity for '{item}' must be non-negative (got {quantity})"
                )));
            }
            levels.set(item, quantity);
        }
        Ok(levels)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(item)
    }

    pub fn get(&self, item: &str) -> Option<i64> {
        self.entries.get(item).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.entries.iter().map(|(item, qty)| (item, *qty))
    }

    /// Same items with the same quantities, ignoring order.
    pub fn same_stock(&self, other: &StockLevels) -> bool {
        self.len() == other.len()
            && self.iter().all(|(item, qty)| other.get(item.as_str()) == Some(qty))
    }

    /// Set an absolute quantity; zero removes the item.
    pub(crate) fn set(&mut self, item: ItemName, quantity: i64) {
        if quantity == 0 {
            self.entries.shift_remove(item.as_str());
        } else {
            self.entries.insert(item, quantity);
        }
    }

    /// Remove an item, returning its last quantity. The rest keep their order.
    pub(crate) fn take(&mut self, item: &str) -> Option<i64> {
        self.entries.shift_remove(item)
    }
}

impl Serialize for StockLevels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (item, quantity) in &self.entries {
            map.serialize_entry(item.as_str(), quantity)?;
        }
        map.end()
    }
}
