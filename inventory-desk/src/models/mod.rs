//! Domain models for inventory-desk.

mod lens;
mod stock;

pub use lens::{Lens, LensOption, NewLens, LENS_PLACEHOLDER};
pub use stock::{Ack, StockIn, StockInForm};
