//! Services module for invoicing-desk.

pub mod api;
pub mod metrics;
pub mod opener;

pub use api::{HttpInvoiceApi, InvoiceApi};
pub use metrics::{get_metrics, init_metrics};
pub use opener::{DocumentOpener, OpenMode, TerminalOpener};
