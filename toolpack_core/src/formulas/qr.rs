//! # QR Code URL Builder
//!
//! Builds the request URL for the external QR image endpoint. This is the
//! only tool that touches anything outside the process, and even here the
//! module only *constructs* the URL; fetching and rendering belong to the
//! presentation layer.
//!
//! ## Example
//!
//! ```rust
//! use toolpack_core::formulas::qr::{calculate, QrInput};
//!
//! let input = QrInput {
//!     content: "https://example.com".to_string(),
//!     size_px: 300,
//! };
//! let result = calculate(&input).unwrap();
//! assert!(result.image_url.starts_with("https://api.qrserver.com/"));
//! assert!(result.image_url.contains("size=300x300"));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// Base endpoint of the external QR image service
const ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Smallest accepted image edge in pixels
pub const MIN_SIZE_PX: u32 = 100;

/// Largest accepted image edge in pixels
pub const MAX_SIZE_PX: u32 = 1000;

/// Default image edge in pixels
pub const DEFAULT_SIZE_PX: u32 = 300;

/// Input parameters for a QR image request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "content": "https://example.com",
///   "size_px": 300
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrInput {
    /// Payload to encode (URL, text, contact info, ...)
    pub content: String,

    /// Requested image edge in pixels; clamped to [100, 1000]
    #[serde(default = "default_size")]
    pub size_px: u32,
}

fn default_size() -> u32 {
    DEFAULT_SIZE_PX
}

impl QrInput {
    /// Image edge clamped to the service's accepted range
    pub fn clamped_size(&self) -> u32 {
        self.size_px.clamp(MIN_SIZE_PX, MAX_SIZE_PX)
    }
}

/// Results from building a QR image request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrResult {
    /// Fully-parameterized image URL, content percent-encoded
    pub image_url: String,

    /// Image edge actually requested after clamping
    pub size_px: u32,

    /// Number of characters encoded
    pub content_length: u64,
}

/// Build the image request URL.
///
/// # Returns
///
/// * `Ok(QrResult)` - URL plus the effective parameters
/// * `Err(ToolError::InvalidInput)` - If the content is empty
pub fn calculate(input: &QrInput) -> ToolResult<QrResult> {
    if input.content.trim().is_empty() {
        return Err(ToolError::invalid_input(
            "content",
            input.content.clone(),
            "Content must not be empty",
        ));
    }

    let size = input.clamped_size();
    let encoded = urlencoding::encode(&input.content);

    Ok(QrResult {
        image_url: format!("{ENDPOINT}?size={size}x{size}&data={encoded}"),
        size_px: size,
        content_length: input.content.chars().count() as u64,
    })
}
