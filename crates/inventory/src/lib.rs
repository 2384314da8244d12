//! Inventory snapshot types.
//!
//! This crate contains the entity shapes the analytics engine consumes,
//! implemented purely as deterministic domain types (no IO, no HTTP, no
//! storage). Rows are owned by the external data store; the engine reads a
//! point-in-time snapshot and never mutates them.

pub mod alert;
pub mod category;
pub mod item;
pub mod movement;
pub mod supplier;

pub use alert::{Alert, AlertKind, AlertSeverity};
pub use category::Category;
pub use item::{InventoryItem, ItemStatus};
pub use movement::{MovementType, StockMovement};
pub use supplier::Supplier;
