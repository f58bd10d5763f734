//! How a generated invoice document is presented to the user.

use desk_core::DeskResult;

/// Where a generated document opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Navigate in place; touch devices block pop-up tabs.
    SameTab,
    NewTab,
}

const MOBILE_MARKERS: [&str; 4] = ["android", "iphone", "ipad", "ipod"];

impl OpenMode {
    pub fn for_user_agent(user_agent: &str) -> Self {
        if is_mobile_user_agent(user_agent) {
            OpenMode::SameTab
        } else {
            OpenMode::NewTab
        }
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Capability that displays a document reference returned by the backend.
pub trait DocumentOpener: Send + Sync {
    fn open(&self, url: &str, mode: OpenMode) -> DeskResult<()>;
}

/// Prints the document link on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalOpener;

impl DocumentOpener for TerminalOpener {
    fn open(&self, url: &str, mode: OpenMode) -> DeskResult<()> {
        tracing::info!(url = %url, mode = ?mode, "Invoice document ready");
        println!("Invoice PDF: {}", url);
        Ok(())
    }
}
