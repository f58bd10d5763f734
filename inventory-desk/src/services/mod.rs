//! Services module for inventory-desk.

pub mod api;
pub mod metrics;

pub use api::{HttpInventoryApi, InventoryApi};
pub use metrics::{get_metrics, init_metrics};
