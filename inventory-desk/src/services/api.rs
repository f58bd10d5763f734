//! Backend client for the inventory routes.

use crate::models::{Ack, Lens, NewLens, StockIn};
use crate::services::metrics::REQUEST_DURATION;
use async_trait::async_trait;
use desk_core::http::JsonTransport;
use desk_core::DeskResult;

/// Endpoints the inventory desk depends on.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET {prefix}/stock`
    async fn list_lenses(&self) -> DeskResult<Vec<Lens>>;

    /// `POST {prefix}/add-lens`
    async fn add_lens(&self, lens: &NewLens) -> DeskResult<Ack>;

    /// `POST {prefix}/stock-in`
    async fn stock_in(&self, request: &StockIn) -> DeskResult<Ack>;
}

/// `InventoryApi` over HTTP, rooted at a configurable route prefix.
#[derive(Clone)]
pub struct HttpInventoryApi {
    transport: JsonTransport,
    prefix: String,
}

impl HttpInventoryApi {
    pub fn new(transport: JsonTransport, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        let prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{}", prefix)
        };
        Self { transport, prefix }
    }

    fn path(&self, route: &str) -> String {
        format!("{}{}", self.prefix, route)
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    #[tracing::instrument(skip(self))]
    async fn list_lenses(&self) -> DeskResult<Vec<Lens>> {
        let _timer = REQUEST_DURATION.with_label_values(&["stock"]).start_timer();
        self.transport.get_json(&self.path("/stock")).await
    }

    #[tracing::instrument(skip_all, fields(name = %lens.name))]
    async fn add_lens(&self, lens: &NewLens) -> DeskResult<Ack> {
        let _timer = REQUEST_DURATION.with_label_values(&["add_lens"]).start_timer();
        self.transport.post_json(&self.path("/add-lens"), lens).await
    }

    #[tracing::instrument(skip_all, fields(lens_id = %request.lens_id, quantity = request.quantity))]
    async fn stock_in(&self, request: &StockIn) -> DeskResult<Ack> {
        let _timer = REQUEST_DURATION.with_label_values(&["stock_in"]).start_timer();
        self.transport.post_json(&self.path("/stock-in"), request).await
    }
}
