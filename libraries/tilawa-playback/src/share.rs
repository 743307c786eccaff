//! Share target seam

use crate::error::ShareError;
use async_trait::async_trait;

/// Where shared verse text goes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Whether a native share sheet exists
    fn supports_native_share(&self) -> bool;

    /// Hand `text` to the native share sheet
    async fn share(&self, text: &str) -> Result<(), ShareError>;

    /// Put `text` on the clipboard
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}
