//! SSD1306 Monochrome OLED Driver
//!
//! A small buffered driver for SSD1306-class OLED controllers (SSD1306, SH1106)
//! on a two-wire I²C bus, for panels up to 128x64 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 I²C support
//! - Page-organised 1-bit framebuffer with pixel, line and text primitives
//! - Built-in 5x8 font (space through `Z`)
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Every bus failure is returned to the caller
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306_mono::{Builder, Color, Display, I2cInterface};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let config = match Builder::new().address(0x3C).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let interface = I2cInterface::new(i2c, config.address);
//! let mut display = match Display::new(interface, config, [0u8; 1024]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! if display.init().is_err() {
//!     return;
//! }
//! display.clear();
//! display.draw_hline(0, 0, 128, Color::On);
//! display.draw_hline(0, 63, 128, Color::On);
//! display.draw_vline(0, 0, 64, Color::On);
//! display.draw_vline(127, 0, 64, Color::On);
//! display.draw_string(4, 4, "HELLO");
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Pixel color
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in bitmap font
pub mod font;
/// Packed pixel buffer and drawing primitives
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{
    BusConfig, Builder, Config, DEFAULT_ADDRESS, Dimensions, FlushMode, MAX_HEIGHT, MAX_WIDTH,
};
pub use display::{Display, State};
pub use error::{BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use interface::{DisplayInterface, I2cInterface, InterfaceError};
