//! Inventory stock form: lens picker, lens registration and stock-in.

use crate::models::{LensOption, NewLens, StockIn, StockInForm};
use crate::services::metrics::{ERRORS_TOTAL, LENSES_REGISTERED, STOCK_IN_UNITS};
use crate::services::InventoryApi;
use desk_core::{DeskError, DeskResult};
use std::sync::Arc;
use validator::Validate;

pub struct InventoryDesk {
    api: Arc<dyn InventoryApi>,
    options: Vec<LensOption>,
}

impl InventoryDesk {
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            api,
            options: vec![LensOption::placeholder()],
        }
    }

    /// Current picker entries; the first is always the placeholder.
    pub fn lens_options(&self) -> &[LensOption] {
        &self.options
    }

    /// Fetch registered lenses and rebuild the picker.
    pub async fn load_lens_options(&mut self) -> DeskResult<&[LensOption]> {
        let lenses = self.api.list_lenses().await.map_err(count_error)?;
        tracing::debug!(count = lenses.len(), "Loaded registered lenses");

        self.options = std::iter::once(LensOption::placeholder())
            .chain(lenses.into_iter().map(LensOption::from))
            .collect();
        Ok(&self.options)
    }

    /// Register a lens by name, then refresh the picker.
    pub async fn register_lens(&mut self, name: &str) -> DeskResult<()> {
        let lens = NewLens::new(name);
        lens.validate().map_err(|e| count_error(e.into()))?;

        let ack = self.api.add_lens(&lens).await.map_err(count_error)?;
        if !ack.success {
            LENSES_REGISTERED.with_label_values(&["rejected"]).inc();
            tracing::warn!(name = %lens.name, "Lens registration rejected");
            return Err(count_error(DeskError::server("Lens registration rejected")));
        }

        LENSES_REGISTERED.with_label_values(&["registered"]).inc();
        tracing::info!(name = %lens.name, "Lens registered");
        self.refresh().await;
        Ok(())
    }

    /// Record received stock for a lens and power, then refresh the picker.
    pub async fn stock_in(&mut self, form: StockInForm) -> DeskResult<StockIn> {
        let request = form.into_request().map_err(count_error)?;

        let ack = self.api.stock_in(&request).await.map_err(count_error)?;
        if !ack.success {
            tracing::warn!(lens_id = %request.lens_id, "Stock-in rejected");
            return Err(count_error(DeskError::server("Stock-in rejected")));
        }

        if request.quantity > 0 {
            STOCK_IN_UNITS.inc_by(request.quantity as u64);
        }
        tracing::info!(
            lens_id = %request.lens_id,
            power = %request.power,
            quantity = request.quantity,
            purchase_date = %request.purchase_date,
            "Stock updated"
        );
        self.refresh().await;
        Ok(request)
    }

    // The write already succeeded; a failed reload only leaves the picker stale.
    async fn refresh(&mut self) {
        if let Err(e) = self.load_lens_options().await {
            tracing::warn!(error = %e, "Failed to refresh lens list");
        }
    }
}

fn count_error(err: DeskError) -> DeskError {
    ERRORS_TOTAL.with_label_values(&[err.kind()]).inc();
    err
}
