//! Cart change notifications.

use docushop_core::{CartTotals, LineItem};

/// The cart as read back from storage after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Totals derived from `items` and the current settings.
    pub totals: CartTotals,
}

impl CartSnapshot {
    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A view that re-syncs itself whenever the cart changes.
///
/// Observers must tolerate their targets being absent; a missing target is
/// skipped, never an error.
pub trait CartObserver {
    /// Called after every mutation and on [`refresh`](super::CartStore::refresh).
    fn cart_changed(&self, snapshot: &CartSnapshot);
}

impl<F> CartObserver for F
where
    F: Fn(&CartSnapshot),
{
    fn cart_changed(&self, snapshot: &CartSnapshot) {
        self(snapshot);
    }
}

/// Handle returned by [`subscribe`](super::CartStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);
