//! Line item model for invoicing-desk.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One invoice row. Immutable once added; `amount` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub power: String,
    #[serde(rename = "qty")]
    pub quantity: i64,
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl LineItem {
    /// Build a line, or `None` when `quantity * unit_price` does not fit a `Decimal`.
    pub(crate) fn new(
        description: String,
        power: String,
        quantity: i64,
        unit_price: Decimal,
    ) -> Option<Self> {
        let amount = Decimal::from(quantity).checked_mul(unit_price)?;
        Some(Self {
            description,
            power,
            quantity,
            unit_price,
            amount,
        })
    }
}

/// Raw text of the item entry inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub description: String,
    pub power: String,
    pub quantity: String,
    pub price: String,
}

impl ItemForm {
    /// Reset after a successful add. Description and price stay for repeated entry.
    pub fn clear_after_add(&mut self) {
        self.power.clear();
        self.quantity.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amount_is_quantity_times_price() {
        let item = LineItem::new("Lens".into(), "10.0D".into(), 3, Decimal::new(1250, 2)).unwrap();
        assert_eq!(item.amount, Decimal::new(3750, 2));
    }

    #[test]
    fn overflowing_amount_is_refused() {
        assert!(LineItem::new("Lens".into(), String::new(), i64::MAX, Decimal::MAX).is_none());
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let item = LineItem::new("Lens".into(), "13.5D".into(), 2, Decimal::new(550, 2)).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "description": "Lens",
                "power": "13.5D",
                "qty": 2,
                "price": 5.5,
                "amount": 11.0
            })
        );
    }

    #[test]
    fn clear_after_add_keeps_description_and_price() {
        let mut form = ItemForm {
            description: "Lens".into(),
            power: "10".into(),
            quantity: "2".into(),
            price: "450".into(),
        };
        form.clear_after_add();
        assert_eq!(form.description, "Lens");
        assert_eq!(form.price, "450");
        assert!(form.power.is_empty());
        assert!(form.quantity.is_empty());
    }
}
