#![allow(dead_code)]

use async_trait::async_trait;
use desk_core::{DeskError, DeskResult};
use invoicing_desk::models::{GenerateResponse, InvoicePayload, NewCustomer, NewProduct};
use invoicing_desk::services::{DocumentOpener, InvoiceApi, OpenMode};
use invoicing_desk::InvoiceDesk;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_CUSTOMER_ID: &str = "7";
pub const TEST_PDF_URL: &str = "/static/invoices/Invoice_561.pdf";

/// How the fake backend answers `POST /generate`.
#[derive(Debug, Clone)]
pub enum GenerateBehavior {
    Success(String),
    Rejected,
    Unreachable,
}

/// In-memory stand-in for the invoicing backend.
pub struct FakeInvoiceApi {
    pub generate: Mutex<GenerateBehavior>,
    pub next_numbers: Mutex<HashMap<String, String>>,
    pub generated: Mutex<Vec<InvoicePayload>>,
    pub lookups: Mutex<Vec<String>>,
    pub customers: Mutex<Vec<NewCustomer>>,
    pub products: Mutex<Vec<NewProduct>>,
}

impl FakeInvoiceApi {
    pub fn new() -> Self {
        Self {
            generate: Mutex::new(GenerateBehavior::Success(TEST_PDF_URL.to_string())),
            next_numbers: Mutex::new(HashMap::new()),
            generated: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
            customers: Mutex::new(Vec::new()),
            products: Mutex::new(Vec::new()),
        }
    }

    pub fn with_next_number(self, customer_id: &str, number: &str) -> Self {
        self.set_next_number(customer_id, number);
        self
    }

    pub fn set_next_number(&self, customer_id: &str, number: &str) {
        self.next_numbers
            .lock()
            .unwrap()
            .insert(customer_id.to_string(), number.to_string());
    }

    pub fn set_generate(&self, behavior: GenerateBehavior) {
        *self.generate.lock().unwrap() = behavior;
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl InvoiceApi for FakeInvoiceApi {
    async fn generate(&self, payload: &InvoicePayload) -> DeskResult<GenerateResponse> {
        self.generated.lock().unwrap().push(payload.clone());
        let behavior = self.generate.lock().unwrap().clone();
        match behavior {
            GenerateBehavior::Success(url) => Ok(GenerateResponse {
                success: true,
                pdf_url: Some(url),
            }),
            GenerateBehavior::Rejected => Ok(GenerateResponse {
                success: false,
                pdf_url: None,
            }),
            GenerateBehavior::Unreachable => Err(DeskError::server("connection refused")),
        }
    }

    async fn next_invoice_number(&self, customer_id: &str) -> DeskResult<String> {
        self.lookups.lock().unwrap().push(customer_id.to_string());
        self.next_numbers
            .lock()
            .unwrap()
            .get(customer_id)
            .cloned()
            .ok_or_else(|| DeskError::server("unknown customer"))
    }

    async fn add_customer(&self, customer: &NewCustomer) -> DeskResult<()> {
        self.customers.lock().unwrap().push(customer.clone());
        Ok(())
    }

    async fn add_product(&self, product: &NewProduct) -> DeskResult<()> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }
}

/// Records every document it is asked to open.
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<(String, OpenMode)>>,
}

impl DocumentOpener for RecordingOpener {
    fn open(&self, url: &str, mode: OpenMode) -> DeskResult<()> {
        self.opened.lock().unwrap().push((url.to_string(), mode));
        Ok(())
    }
}

pub struct TestDesk {
    pub desk: InvoiceDesk,
    pub api: Arc<FakeInvoiceApi>,
    pub opener: Arc<RecordingOpener>,
}

impl TestDesk {
    pub fn new(api: FakeInvoiceApi, mode: OpenMode) -> Self {
        let api = Arc::new(api);
        let opener = Arc::new(RecordingOpener::default());
        let desk = InvoiceDesk::new(api.clone(), opener.clone(), mode);
        Self { desk, api, opener }
    }

    pub fn spawn() -> Self {
        Self::new(
            FakeInvoiceApi::new().with_next_number(TEST_CUSTOMER_ID, "561"),
            OpenMode::NewTab,
        )
    }

    /// Add a line through the item inputs, as the view would.
    pub fn add(&mut self, description: &str, power: &str, qty: &str, price: &str) {
        self.desk.form.description = description.to_string();
        self.desk.form.power = power.to_string();
        self.desk.form.quantity = qty.to_string();
        self.desk.form.price = price.to_string();
        self.desk.add_from_form().expect("Failed to add line item");
    }
}
