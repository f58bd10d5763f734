//! Stock-in model for inventory-desk.

use chrono::{NaiveDate, Utc};
use desk_core::{DeskError, DeskResult};
use serde::{Deserialize, Serialize};

/// Body of `POST /inventory/stock-in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockIn {
    pub lens_id: String,
    pub power: String,
    pub quantity: i64,
    pub supplier: String,
    pub purchase_date: NaiveDate,
}

/// Raw stock-in inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockInForm {
    pub lens_id: String,
    pub power: String,
    pub quantity: String,
    pub supplier: String,
    /// Defaults to today (UTC) when not given.
    pub purchase_date: Option<NaiveDate>,
}

impl StockInForm {
    /// Check presence of lens and quantity, then build the request body.
    ///
    /// Power is sent exactly as typed.
    pub fn into_request(self) -> DeskResult<StockIn> {
        let lens_id = self.lens_id.trim();
        let quantity = self.quantity.trim();
        if lens_id.is_empty() || quantity.is_empty() {
            return Err(DeskError::validation("Please select a lens and quantity."));
        }

        let quantity = quantity
            .parse::<i64>()
            .map_err(|_| DeskError::validation("Quantity must be a whole number."))?;

        Ok(StockIn {
            lens_id: lens_id.to_string(),
            power: self.power,
            quantity,
            supplier: self.supplier,
            purchase_date: self
                .purchase_date
                .unwrap_or_else(|| Utc::now().date_naive()),
        })
    }
}

/// `{success: bool}` acknowledgement returned by the inventory endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
}
