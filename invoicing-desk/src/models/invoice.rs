//! Invoice submission payloads for invoicing-desk.

use super::LineItem;
use desk_core::utils::serde_ext::string_or_number;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePayload {
    pub invoice_no: String,
    pub date: String,
    pub customer_id: String,
    pub items: Vec<LineItem>,
    pub print_letterhead: bool,
    pub print_ntn: bool,
}

/// Response of `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// Response of `GET /next_invoice/{customer_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NextInvoiceResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub invoice_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_response_tolerates_missing_url() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.pdf_url.is_none());
    }

    #[test]
    fn next_invoice_accepts_numeric_value() {
        let resp: NextInvoiceResponse = serde_json::from_str(r#"{"invoice_no": 561}"#).unwrap();
        assert_eq!(resp.invoice_no, "561");
    }
}
