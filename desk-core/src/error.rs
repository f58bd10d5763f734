use thiserror::Error;

pub type DeskResult<T> = Result<T, DeskError>;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No row selected")]
    NoSelection,

    #[error("Invoice has no line items")]
    EmptyInvoice,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DeskError {
    pub fn validation(message: impl Into<String>) -> Self {
        DeskError::Validation(message.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        DeskError::Server(message.into())
    }

    /// Text for the blocking notification shown at the point of the user action.
    pub fn user_message(&self) -> String {
        match self {
            DeskError::Validation(msg) => msg.clone(),
            DeskError::NoSelection => "Please select a row first".to_string(),
            DeskError::EmptyInvoice => "Add at least one item".to_string(),
            DeskError::Server(_) => "Server error".to_string(),
            DeskError::Config(_) => "Configuration error".to_string(),
            DeskError::Internal(_) => "Unexpected error".to_string(),
        }
    }

    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DeskError::Validation(_) => "validation",
            DeskError::NoSelection => "no_selection",
            DeskError::EmptyInvoice => "empty_invoice",
            DeskError::Server(_) => "server",
            DeskError::Config(_) => "config",
            DeskError::Internal(_) => "internal",
        }
    }
}

impl From<reqwest::Error> for DeskError {
    fn from(err: reqwest::Error) -> Self {
        DeskError::Server(err.to_string())
    }
}

impl From<config::ConfigError> for DeskError {
    fn from(err: config::ConfigError) -> Self {
        DeskError::Config(anyhow::Error::new(err))
    }
}

impl From<validator::ValidationErrors> for DeskError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Prefer the first field-level message so the alert reads like the form's own.
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        DeskError::Validation(message)
    }
}

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        DeskError::Internal(anyhow::Error::new(err))
    }
}
