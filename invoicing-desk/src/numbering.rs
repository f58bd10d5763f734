//! Invoice-number field with auto-population until the user types into it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingMode {
    #[default]
    Auto,
    /// Terminal for the session.
    ManuallyEdited,
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceNumbering {
    mode: NumberingMode,
    value: String,
}

impl InvoiceNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> NumberingMode {
        self.mode
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// A direct user edit. Customer changes stop overwriting the field from here on.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.mode == NumberingMode::Auto {
            tracing::debug!("Invoice number edited manually; auto numbering disabled");
        }
        self.mode = NumberingMode::ManuallyEdited;
    }

    /// Whether a customer change should look up the next number.
    pub fn follows_customer(&self) -> bool {
        self.mode == NumberingMode::Auto
    }

    /// Apply a suggestion triggered by a customer change. Ignored once edited.
    pub fn suggest(&mut self, value: impl Into<String>) -> bool {
        if !self.follows_customer() {
            return false;
        }
        self.value = value.into();
        true
    }

    /// Pre-populate the field for the next invoice after a submission.
    pub fn prepare_next(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}
