//! Domain models for invoicing-desk.

mod customer;
mod invoice;
mod line_item;
mod product;

pub use customer::NewCustomer;
pub use invoice::{GenerateResponse, InvoicePayload, NextInvoiceResponse};
pub use line_item::{ItemForm, LineItem};
pub use product::{NewProduct, ProductChoice};
