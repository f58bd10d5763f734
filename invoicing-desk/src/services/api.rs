//! Backend client for invoice generation, numbering and quick-add forms.

use crate::models::{GenerateResponse, InvoicePayload, NewCustomer, NewProduct, NextInvoiceResponse};
use crate::services::metrics::REQUEST_DURATION;
use async_trait::async_trait;
use desk_core::http::JsonTransport;
use desk_core::DeskResult;

/// Endpoints the invoice desk depends on.
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    /// `POST /generate`
    async fn generate(&self, payload: &InvoicePayload) -> DeskResult<GenerateResponse>;

    /// `GET /next_invoice/{customer_id}`
    async fn next_invoice_number(&self, customer_id: &str) -> DeskResult<String>;

    /// `POST /add_customer`
    async fn add_customer(&self, customer: &NewCustomer) -> DeskResult<()>;

    /// `POST /add_product`
    async fn add_product(&self, product: &NewProduct) -> DeskResult<()>;
}

/// `InvoiceApi` over HTTP.
#[derive(Clone)]
pub struct HttpInvoiceApi {
    transport: JsonTransport,
}

impl HttpInvoiceApi {
    pub fn new(transport: JsonTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl InvoiceApi for HttpInvoiceApi {
    #[tracing::instrument(skip_all, fields(invoice_no = %payload.invoice_no, items = payload.items.len()))]
    async fn generate(&self, payload: &InvoicePayload) -> DeskResult<GenerateResponse> {
        let _timer = REQUEST_DURATION.with_label_values(&["generate"]).start_timer();
        self.transport.post_json("/generate", payload).await
    }

    #[tracing::instrument(skip(self))]
    async fn next_invoice_number(&self, customer_id: &str) -> DeskResult<String> {
        let _timer = REQUEST_DURATION
            .with_label_values(&["next_invoice"])
            .start_timer();
        let path = format!("/next_invoice/{}", urlencoding::encode(customer_id));
        let response: NextInvoiceResponse = self.transport.get_json(&path).await?;
        Ok(response.invoice_no)
    }

    #[tracing::instrument(skip_all, fields(name = %customer.name))]
    async fn add_customer(&self, customer: &NewCustomer) -> DeskResult<()> {
        let _timer = REQUEST_DURATION
            .with_label_values(&["add_customer"])
            .start_timer();
        self.transport.post_ack("/add_customer", customer).await
    }

    #[tracing::instrument(skip_all, fields(name = %product.name))]
    async fn add_product(&self, product: &NewProduct) -> DeskResult<()> {
        let _timer = REQUEST_DURATION
            .with_label_values(&["add_product"])
            .start_timer();
        self.transport.post_ack("/add_product", product).await
    }
}
