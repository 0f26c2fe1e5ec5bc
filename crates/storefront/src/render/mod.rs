//! Render fan-out for cart state.
//!
//! Every surface that displays cart state is a [`CartObserver`](crate::cart::CartObserver)
//! writing into an abstract [`Document`]. After each mutation the store
//! notifies all of them, so every view is re-synced from the same fresh read:
//!
//! - [`BadgeSync`] - item count badges
//! - [`TotalsSync`] - subtotal and checkout total displays
//! - [`LineItemSync`] - checkout order listing
//!
//! Targets that are not on the page are skipped silently.

mod document;
mod surfaces;
mod sync;
mod views;

pub use document::{Document, MemoryDocument, Selector};
pub use surfaces::SurfaceIds;
pub use sync::{BadgeSync, LineItemSync, TotalsSync, install_default_views};
pub use views::{CartTableTemplate, LineItemView, OrderItemsTemplate};
