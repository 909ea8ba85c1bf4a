//! Observer seam for the store's logging side channel.

use stockkeep_core::InventoryError;

use crate::event::StockEvent;

/// Receives everything the store wants to tell the outside world.
///
/// The store never logs directly; it reports to an observer. The default
/// [`TracingObserver`] forwards to `tracing`, tests plug in a recorder.
pub trait InventoryObserver: Send + Sync {
    /// A state change happened.
    fn on_event(&self, event: &StockEvent);

    /// An operation was rejected; the error is returned to the caller as well.
    fn on_rejected(&self, operation: &'static str, error: &InventoryError);

    /// A human-readable items report was requested.
    fn on_report(&self, lines: &[String]);
}

/// Observer that writes human-readable `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl InventoryObserver for TracingObserver {
    fn on_event(&self, event: &StockEvent) {
        match event {
            StockEvent::Added(e) => {
                tracing::info!(
                    event_type = event.event_type(),
                    "Added {} x {}",
                    e.quantity,
                    e.item
                );
            }
            StockEvent::Reduced(e) => {
                tracing::info!(
                    event_type = event.event_type(),
                    "Removed {} of {} (remaining {})",
                    e.quantity,
                    e.item,
                    e.remaining
                );
            }
            StockEvent::Depleted(e) => {
                tracing::info!(event_type = event.event_type(), "Removed all of item {}", e.item);
            }
            StockEvent::Replaced(e) => {
                tracing::debug!(
                    event_type = event.event_type(),
                    "Inventory replaced ({} items)",
                    e.items
                );
            }
        }
    }

    fn on_rejected(&self, operation: &'static str, error: &InventoryError) {
        tracing::error!(operation, "{operation}: {error}");
    }

    fn on_report(&self, lines: &[String]) {
        tracing::info!("Items Report:");
        for line in lines {
            tracing::info!("{line}");
        }
    }
}

/// Observer that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl InventoryObserver for NoopObserver {
    fn on_event(&self, _event: &StockEvent) {}

    fn on_rejected(&self, _operation: &'static str, _error: &InventoryError) {}

    fn on_report(&self, _lines: &[String]) {}
}
