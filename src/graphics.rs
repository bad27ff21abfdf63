//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] for [`Display`] so any embedded-graphics
//! primitive, font or image can be rendered into the framebuffer. Like the
//! built-in primitives, off-panel pixels are dropped, and nothing is sent to
//! the panel until [`Display::flush`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ssd1306_mono::{Builder, Color, Display, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
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
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let interface = I2cInterface::new(MockI2c, config.address);
//! let mut display = match Display::new(interface, config, [0u8; 1024]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.init();
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 64))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(80, 16), 32)
//!     .into_styled(PrimitiveStyle::with_fill(Color::On))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(4, 20),
//!     MonoTextStyle::new(&FONT_6X10, Color::On),
//! )
//! .draw(&mut display);
//!
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let framebuffer = self.framebuffer_mut();
        for Pixel(Point { x, y }, color) in pixels {
            framebuffer.set_pixel(x, y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer_mut().fill(color);
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(dims.width as u32, dims.height as u32)
    }
}
