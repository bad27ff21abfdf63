//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Invalid configuration, detected before the bus is touched
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Drawing never fails: pixels outside the panel and characters without a
//! glyph are silently skipped.
//!
//! ## Example
//!
//! ```
//! use ssd1306_mono::{Builder, BuilderError, Dimensions};
//!
//! // Height must be a whole number of pages
//! let result = Dimensions::new(128, 60);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Address must be a non-reserved 7-bit address
//! let result = Builder::new().address(0x80).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress(0x80))));
//! ```

use crate::interface::DisplayInterface;

/// Maximum panel width (segment outputs) supported by SSD1306-class controllers
pub const MAX_WIDTH: u16 = 128;

/// Maximum panel height (COM outputs) supported by SSD1306-class controllers
pub const MAX_HEIGHT: u16 = 64;

/// Number of RAM columns on the largest supported controller (SH1106)
///
/// The column offset plus the panel width must fit in this.
pub const MAX_RAM_COLUMNS: u16 = 132;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I²C)
    ///
    /// Wraps the first failed bus transaction. The operation stopped there;
    /// retrying is up to the caller.
    Interface(I::Error),
    /// The operation needs an initialised controller
    ///
    /// Call [`Display::init`](crate::display::Display::init) first.
    NotInitialized,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::NotInitialized => write!(f, "Display not initialized"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These are fatal: they occur before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
    /// Address is not a usable 7-bit I²C address
    InvalidAddress(u8),
    /// Column offset pushes the visible area past the controller RAM
    InvalidColumnOffset {
        /// Offset requested
        offset: u8,
        /// Panel width
        width: u16,
    },
    /// SDA and SCL are assigned to the same pin
    InvalidPins {
        /// Data pin
        sda: u8,
        /// Clock pin
        scl: u8,
    },
    /// Bus frequency is zero or above fast-mode plus
    InvalidFrequency(u32),
    /// Transaction timeout is zero
    InvalidTimeout,
    /// Framebuffer storage is too small for the panel
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_WIDTH}x{MAX_HEIGHT}, height must be multiple of 8)"
            ),
            Self::InvalidAddress(address) => {
                write!(f, "Invalid I2C address {address:#04x}")
            }
            Self::InvalidColumnOffset { offset, width } => write!(
                f,
                "Column offset {offset} with width {width} exceeds {MAX_RAM_COLUMNS} RAM columns"
            ),
            Self::InvalidPins { sda, scl } => {
                write!(f, "SDA ({sda}) and SCL ({scl}) must be different pins")
            }
            Self::InvalidFrequency(hz) => write!(f, "Invalid bus frequency: {hz} Hz"),
            Self::InvalidTimeout => write!(f, "Bus timeout must be non-zero"),
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Buffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_builder_error_messages() {
        assert_eq!(
            BuilderError::InvalidAddress(0x80).to_string(),
            "Invalid I2C address 0x80"
        );
        assert_eq!(
            BuilderError::BufferTooSmall {
                required: 1024,
                provided: 512
            }
            .to_string(),
            "Buffer too small: required 1024 bytes, provided 512"
        );
    }
}
