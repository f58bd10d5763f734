use serde::Serialize;
use validator::Validate;

/// Body of `POST /add_customer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, message = "Customer name required"))]
    pub name: String,
    pub address: String,
}

impl NewCustomer {
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
        }
    }
}
