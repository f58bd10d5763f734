use desk_core::{DeskError, DeskResult};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use validator::Validate;

/// Body of `POST /add_product`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Validate)]
struct ProductForm {
    #[validate(length(min = 1, message = "Enter product name & price"))]
    name: String,
    #[validate(length(min = 1, message = "Enter product name & price"))]
    price: String,
}

impl NewProduct {
    /// Build from raw form text. Both fields are required and the price must be numeric.
    pub fn from_form(name: &str, price: &str) -> DeskResult<Self> {
        let form = ProductForm {
            name: name.trim().to_string(),
            price: price.trim().to_string(),
        };
        form.validate()?;

        let price = Decimal::from_str(&form.price)
            .map_err(|_| DeskError::validation("Product price must be numeric"))?;

        Ok(Self {
            name: form.name,
            price,
        })
    }
}

/// A product picker entry encoded as `"<description>|<price>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductChoice {
    pub description: String,
    pub price: String,
}

impl ProductChoice {
    /// `None` for an empty selection.
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        let mut parts = value.split('|');
        let description = parts.next().unwrap_or_default().to_string();
        let price = parts.next().unwrap_or_default().to_string();
        Some(Self { description, price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_requires_name_and_price() {
        let err = NewProduct::from_form("  ", "100").unwrap_err();
        assert_eq!(err.user_message(), "Enter product name & price");

        let err = NewProduct::from_form("Frame", "").unwrap_err();
        assert_eq!(err.user_message(), "Enter product name & price");
    }

    #[test]
    fn product_price_must_be_numeric() {
        assert!(matches!(
            NewProduct::from_form("Frame", "cheap"),
            Err(DeskError::Validation(_))
        ));
        let product = NewProduct::from_form(" Frame ", "1200.50").unwrap();
        assert_eq!(product.name, "Frame");
        assert_eq!(product.price, Decimal::new(120050, 2));
    }

    #[test]
    fn product_choice_splits_description_and_price() {
        let choice = ProductChoice::parse("Blue Cut Lens|450").unwrap();
        assert_eq!(choice.description, "Blue Cut Lens");
        assert_eq!(choice.price, "450");
        assert!(ProductChoice::parse("").is_none());
    }
}
