//! Lens model for inventory-desk.

use desk_core::utils::serde_ext::string_or_number;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Label of the leading "nothing chosen" entry in the lens picker.
pub const LENS_PLACEHOLDER: &str = "Choose registered lens...";

/// A registered lens as listed by `GET /inventory/stock`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lens {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

/// One entry of the lens picker. The placeholder has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LensOption {
    pub value: String,
    pub label: String,
}

impl LensOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: LENS_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<Lens> for LensOption {
    fn from(lens: Lens) -> Self {
        Self {
            value: lens.id,
            label: lens.name,
        }
    }
}

/// Body of `POST /inventory/add-lens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewLens {
    #[validate(length(min = 1, message = "Please enter the lens name."))]
    pub name: String,
}

impl NewLens {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lens_ids_may_be_numeric() {
        let lenses: Vec<Lens> =
            serde_json::from_str(r#"[{"id": 3, "name": "Crizal"}, {"id": "4", "name": "Kodak"}]"#)
                .unwrap();
        let options: Vec<LensOption> = lenses.into_iter().map(LensOption::from).collect();
        assert_eq!(options[0].value, "3");
        assert_eq!(options[1].label, "Kodak");
    }

    #[test]
    fn blank_lens_name_is_invalid() {
        assert!(NewLens::new("   ").validate().is_err());
        assert!(NewLens::new(" Crizal ").validate().is_ok());
        assert_eq!(NewLens::new(" Crizal ").name, "Crizal");
    }
}
