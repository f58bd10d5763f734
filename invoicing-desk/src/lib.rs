//! invoicing-desk: builds an invoice line by line and hands it to the backend for PDF generation.

pub mod desk;
pub mod line_items;
pub mod models;
pub mod numbering;
pub mod power;
pub mod services;
pub mod view;

pub use desk::{InvoiceDesk, InvoiceHeader, SubmitOutcome};
pub use line_items::{ItemsEvent, LineItemManager};
pub use numbering::{InvoiceNumbering, NumberingMode};
pub use power::normalize_power;
