//! Invoice builder controller: owns the working invoice and binds it to the backend.

use crate::line_items::{ItemsEvent, LineItemManager};
use crate::models::{InvoicePayload, ItemForm, LineItem, NewCustomer, NewProduct, ProductChoice};
use crate::numbering::InvoiceNumbering;
use crate::services::metrics::{ERRORS_TOTAL, INVOICES_SUBMITTED};
use crate::services::{DocumentOpener, InvoiceApi, OpenMode};
use desk_core::{DeskError, DeskResult};
use rust_decimal::Decimal;
use std::sync::Arc;
use validator::Validate;

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub pdf_url: String,
    /// Number suggested for the next invoice, if the lookup succeeded.
    pub next_invoice_no: Option<String>,
}

/// Invoice header inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceHeader {
    pub date: String,
    pub customer_id: String,
    pub print_letterhead: bool,
    pub print_ntn: bool,
}

impl Default for InvoiceHeader {
    fn default() -> Self {
        Self {
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            customer_id: String::new(),
            print_letterhead: true,
            print_ntn: true,
        }
    }
}

pub struct InvoiceDesk {
    api: Arc<dyn InvoiceApi>,
    opener: Arc<dyn DocumentOpener>,
    open_mode: OpenMode,
    items: LineItemManager,
    numbering: InvoiceNumbering,
    pub form: ItemForm,
    pub header: InvoiceHeader,
}

impl InvoiceDesk {
    pub fn new(
        api: Arc<dyn InvoiceApi>,
        opener: Arc<dyn DocumentOpener>,
        open_mode: OpenMode,
    ) -> Self {
        Self {
            api,
            opener,
            open_mode,
            items: LineItemManager::new(),
            numbering: InvoiceNumbering::new(),
            form: ItemForm::default(),
            header: InvoiceHeader::default(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ItemsEvent) + Send + 'static) {
        self.items.subscribe(listener);
    }

    pub fn items(&self) -> &[LineItem] {
        self.items.list()
    }

    pub fn selected(&self) -> Option<usize> {
        self.items.selected()
    }

    pub fn total(&self) -> Decimal {
        self.items.total()
    }

    pub fn invoice_no(&self) -> &str {
        self.numbering.value()
    }

    pub fn numbering(&self) -> &InvoiceNumbering {
        &self.numbering
    }

    /// Add a line from the item inputs, then clear power and quantity only.
    pub fn add_from_form(&mut self) -> DeskResult<()> {
        let ItemForm {
            description,
            power,
            quantity,
            price,
        } = &self.form;
        self.items
            .add_item(description, power, quantity, price)
            .map_err(count_error)?;
        self.form.clear_after_add();
        Ok(())
    }

    pub fn select_row(&mut self, index: usize) -> bool {
        self.items.select_row(index)
    }

    pub fn remove_selected(&mut self) -> DeskResult<LineItem> {
        self.items.remove_selected().map_err(count_error)
    }

    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        self.items.clear_all(confirm)
    }

    /// Fill description and price from a `"<description>|<price>"` product option.
    pub fn pick_product(&mut self, value: &str) {
        if let Some(choice) = ProductChoice::parse(value) {
            self.form.description = choice.description;
            self.form.price = choice.price;
        }
    }

    /// A direct edit of the invoice-number field.
    pub fn edit_invoice_no(&mut self, value: impl Into<String>) {
        self.numbering.edit(value);
    }

    /// Change the customer and, unless the number was typed by hand, look up its next number.
    pub async fn select_customer(&mut self, customer_id: &str) -> DeskResult<()> {
        self.header.customer_id = customer_id.to_string();

        if !self.numbering.follows_customer() {
            return Ok(());
        }
        if customer_id.is_empty() {
            self.numbering.suggest(String::new());
            return Ok(());
        }

        let next = self
            .api
            .next_invoice_number(customer_id)
            .await
            .map_err(count_error)?;
        self.numbering.suggest(next);
        Ok(())
    }

    /// Snapshot the current invoice for submission.
    pub fn build_payload(&self) -> DeskResult<InvoicePayload> {
        if self.items.is_empty() {
            return Err(count_error(DeskError::EmptyInvoice));
        }

        Ok(InvoicePayload {
            invoice_no: self.numbering.value().to_string(),
            date: self.header.date.clone(),
            customer_id: self.header.customer_id.clone(),
            items: self.items.list().to_vec(),
            print_letterhead: self.header.print_letterhead,
            print_ntn: self.header.print_ntn,
        })
    }

    /// Generate the PDF, show it, and start a fresh invoice.
    ///
    /// Any failure leaves the working invoice untouched.
    pub async fn submit(&mut self) -> DeskResult<SubmitOutcome> {
        let payload = self.build_payload()?;

        let response = self.api.generate(&payload).await.map_err(|e| {
            INVOICES_SUBMITTED.with_label_values(&["failed"]).inc();
            count_error(e)
        })?;

        let pdf_url = match (response.success, response.pdf_url) {
            (true, Some(url)) => url,
            (success, _) => {
                INVOICES_SUBMITTED.with_label_values(&["rejected"]).inc();
                tracing::warn!(
                    invoice_no = %payload.invoice_no,
                    success,
                    "PDF generation failed"
                );
                return Err(count_error(DeskError::server("PDF generation failed")));
            }
        };

        INVOICES_SUBMITTED.with_label_values(&["generated"]).inc();
        tracing::info!(
            invoice_no = %payload.invoice_no,
            customer_id = %payload.customer_id,
            items = payload.items.len(),
            pdf_url = %pdf_url,
            "Invoice generated"
        );

        if let Err(e) = self.opener.open(&pdf_url, self.open_mode) {
            tracing::warn!(error = %e, "Failed to open invoice document");
        }

        self.items.reset();

        let next_invoice_no = match self.api.next_invoice_number(&payload.customer_id).await {
            Ok(next) => {
                self.numbering.prepare_next(next.clone());
                Some(next)
            }
            Err(e) => {
                tracing::warn!(
                    customer_id = %payload.customer_id,
                    error = %e,
                    "Could not fetch next invoice number"
                );
                None
            }
        };

        Ok(SubmitOutcome {
            pdf_url,
            next_invoice_no,
        })
    }

    pub async fn add_customer(&self, name: &str, address: &str) -> DeskResult<()> {
        let customer = NewCustomer::new(name, address);
        customer.validate().map_err(|e| count_error(e.into()))?;
        self.api.add_customer(&customer).await.map_err(count_error)?;
        tracing::info!(name = %customer.name, "Customer added");
        Ok(())
    }

    pub async fn add_product(&self, name: &str, price: &str) -> DeskResult<()> {
        let product = NewProduct::from_form(name, price).map_err(count_error)?;
        self.api.add_product(&product).await.map_err(count_error)?;
        tracing::info!(name = %product.name, price = %product.price, "Product added");
        Ok(())
    }
}

fn count_error(err: DeskError) -> DeskError {
    ERRORS_TOTAL.with_label_values(&[err.kind()]).inc();
    err
}
