//! inventory-desk: registers lenses and records stock received per power.

pub mod models;
pub mod services;
pub mod stock;
pub mod view;

pub use stock::InventoryDesk;
