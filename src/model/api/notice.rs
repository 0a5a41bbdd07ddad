use serde::{Deserialize, Serialize};

use crate::navigation::Page;

/// A short message for the user, shown by the frontend as a toast, and the
/// page to move on to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            next: None,
        }
    }

    /// Send the user on to `page` once the message is shown.
    pub fn then(self, page: Page) -> Self {
        Self {
            next: Some(page.path().to_string()),
            ..self
        }
    }
}
