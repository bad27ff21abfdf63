//! Pixel color for monochrome OLED panels
//!
//! Each pixel is one bit in the framebuffer: set means the OLED emits light.
//! [`NORMAL_DISPLAY`](crate::command::NORMAL_DISPLAY) /
//! [`INVERT_DISPLAY`](crate::command::INVERT_DISPLAY) flip that meaning on
//! the controller without touching the buffer.
//!
//! ## Example
//!
//! ```
//! use ssd1306_mono::Color;
//!
//! assert!(Color::On.is_on());
//! assert_eq!(Color::from(false), Color::Off);
//! assert_eq!(Color::On.invert(), Color::Off);
//! ```

/// State of a single pixel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

impl Color {
    /// Whether the pixel is lit
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// The opposite color
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl From<Color> for bool {
    fn from(color: Color) -> Self {
        color.is_on()
    }
}
