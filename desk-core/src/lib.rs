//! desk-core: Shared infrastructure for the lens shop desk clients.
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod utils;

pub use error::{DeskError, DeskResult};
pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use validator;
