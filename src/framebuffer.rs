//! Packed 1-bit framebuffer
//!
//! The buffer mirrors the controller's display RAM. The panel is split into
//! horizontal *pages* eight rows tall; within a page each byte holds one
//! column, bit 0 being the top row of the page:
//!
//! ```text
//!            x=0   x=1        x=W-1
//! page 0   [ b0  ][ b1  ] ... [ bW-1  ]   rows 0..8
//! page 1   [ bW  ][ bW+1] ... [ b2W-1 ]   rows 8..16
//! ...
//! ```
//!
//! so pixel `(x, y)` lives in byte `(y / 8) * width + x`, bit `y % 8`.
//! [`Display::flush`](crate::display::Display::flush) streams the buffer page
//! by page in exactly this order.
//!
//! Coordinates are signed and anything outside the panel is silently
//! ignored, so callers can draw partially visible shapes without clipping.
//!
//! ## Example
//!
//! ```
//! use ssd1306_mono::{Color, Dimensions, Framebuffer};
//!
//! let mut fb = match Framebuffer::new(Dimensions::default(), [0u8; 1024]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! fb.draw_hline(0, 0, 128, Color::On);
//! fb.draw_string(2, 8, "HELLO");
//! fb.set_pixel(-5, 200, Color::On); // off-panel, ignored
//!
//! assert_eq!(fb.pixel(127, 0), Some(Color::On));
//! assert_eq!(fb.page(0).map(|p| p[0]), Some(0x01));
//! ```

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BuilderError;
use crate::font::{self, ADVANCE, GLYPH_HEIGHT};

/// Map an in-range pixel to its byte index and bit mask
///
/// `x` and `y` must already be inside the panel.
///
/// ```
/// use ssd1306_mono::framebuffer::pixel_location;
///
/// assert_eq!(pixel_location(0, 0, 128), (0, 0x01));
/// assert_eq!(pixel_location(5, 7, 128), (5, 0x80));
/// assert_eq!(pixel_location(5, 8, 128), (133, 0x01));
/// ```
pub fn pixel_location(x: u32, y: u32, width: u32) -> (usize, u8) {
    let page = y / 8;
    let index = (page * width + x) as usize;
    let mask = 1 << (y % 8);
    (index, mask)
}

/// Page-organised monochrome pixel buffer
///
/// ## Type Parameters
///
/// * `B` - storage, typically `[u8; N]`; only the first
///   `dimensions.buffer_size()` bytes are used
pub struct Framebuffer<B> {
    buffer: B,
    dimensions: Dimensions,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as the framebuffer for a panel of `dimensions`
    ///
    /// The contents are left as they are; call [`clear`](Self::clear) for a
    /// blank screen.
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidDimensions` if `dimensions` break the
    ///   [`Dimensions::new`] rules (the fields are public)
    /// - `BuilderError::BufferTooSmall` if `buffer` is shorter than
    ///   `dimensions.buffer_size()`
    pub fn new(dimensions: Dimensions, buffer: B) -> Result<Self, BuilderError> {
        let dimensions = Dimensions::new(dimensions.width, dimensions.height)?;
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BuilderError::BufferTooSmall { required, provided });
        }
        Ok(Self { buffer, dimensions })
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The whole active buffer, page by page
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        let size = self.dimensions.buffer_size();
        &mut self.buffer.as_mut()[..size]
    }

    /// The `width` bytes of page `page`, or `None` past the last page
    pub fn page(&self, page: u16) -> Option<&[u8]> {
        if page >= self.dimensions.pages() {
            return None;
        }
        let width = self.dimensions.width as usize;
        let start = page as usize * width;
        self.as_bytes().get(start..start + width)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(Color::Off);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let value = if color.is_on() { 0xFF } else { 0x00 };
        self.as_bytes_mut().fill(value);
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let width = self.dimensions.width as u32;
        if x >= width || y >= self.dimensions.height as u32 {
            return None;
        }
        Some(pixel_location(x, y, width))
    }

    /// Set one pixel; off-panel coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        let Some(byte) = self.as_bytes_mut().get_mut(index) else {
            return;
        };
        if color.is_on() {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read one pixel, `None` if off-panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, mask) = self.locate(x, y)?;
        let byte = self.as_bytes().get(index)?;
        Some(Color::from(byte & mask != 0))
    }

    /// Draw `length` pixels rightwards from `(x, y)`
    pub fn draw_hline(&mut self, x: i32, y: i32, length: u32, color: Color) {
        for i in 0..length {
            self.set_pixel(x.saturating_add_unsigned(i), y, color);
        }
    }

    /// Draw `length` pixels downwards from `(x, y)`
    pub fn draw_vline(&mut self, x: i32, y: i32, length: u32, color: Color) {
        for i in 0..length {
            self.set_pixel(x, y.saturating_add_unsigned(i), color);
        }
    }

    /// Draw one character with its top-left corner at `(x, y)`
    ///
    /// Writes a 6x8 cell: five glyph columns followed by one blank column.
    /// Lit and unlit glyph pixels are both written. Characters without a
    /// glyph draw nothing.
    pub fn draw_char(&mut self, x: i32, y: i32, ch: u8) {
        let Some(glyph) = font::glyph(ch) else {
            return;
        };

        for col in 0..ADVANCE {
            let bits = glyph.get(col).copied().unwrap_or(0);
            let px = x.saturating_add(col as i32);
            for row in 0..GLYPH_HEIGHT {
                let py = y.saturating_add(row as i32);
                self.set_pixel(px, py, Color::from(bits & (1 << row) != 0));
            }
        }
    }

    /// Draw `text` on one line starting at `(x, y)`
    ///
    /// Each byte advances the cursor six columns, including bytes without a
    /// glyph. There is no wrapping; text running off the panel is clipped.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        let mut cursor = x;
        for ch in text.bytes() {
            self.draw_char(cursor, y, ch);
            cursor = cursor.saturating_add(ADVANCE as i32);
        }
    }

    /// Give the storage back
    pub fn release(self) -> B {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 128;
    const H: i32 = 64;

    fn blank() -> Framebuffer<[u8; 1024]> {
        Framebuffer::new(Dimensions::default(), [0u8; 1024]).unwrap()
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let result = Framebuffer::new(Dimensions::default(), [0u8; 512]);
        assert!(matches!(
            result,
            Err(BuilderError::BufferTooSmall {
                required: 1024,
                provided: 512
            })
        ));
    }

    #[test]
    fn test_new_rejects_hand_built_dimensions() {
        // Partial last page
        let dims = Dimensions {
            width: 128,
            height: 12,
        };
        assert!(matches!(
            Framebuffer::new(dims, [0u8; 1024]),
            Err(BuilderError::InvalidDimensions {
                width: 128,
                height: 12
            })
        ));

        let dims = Dimensions {
            width: 200,
            height: 64,
        };
        assert!(matches!(
            Framebuffer::new(dims, [0u8; 2048]),
            Err(BuilderError::InvalidDimensions {
                width: 200,
                height: 64
            })
        ));

        let dims = Dimensions {
            width: 0,
            height: 8,
        };
        assert!(matches!(
            Framebuffer::new(dims, [0u8; 16]),
            Err(BuilderError::InvalidDimensions { width: 0, height: 8 })
        ));
    }

    #[test]
    fn test_new_accepts_oversized_buffer() {
        let fb = Framebuffer::new(Dimensions::new(64, 32).unwrap(), [0u8; 1024]).unwrap();
        assert_eq!(fb.as_bytes().len(), 256);
        assert!(fb.page(4).is_none());
    }

    #[test]
    fn test_set_and_read_every_pixel() {
        let mut fb = blank();
        for y in 0..H {
            for x in 0..W {
                fb.set_pixel(x, y, Color::On);
                assert_eq!(fb.pixel(x, y), Some(Color::On));
                fb.set_pixel(x, y, Color::On);
                assert_eq!(fb.pixel(x, y), Some(Color::On));

                fb.set_pixel(x, y, Color::Off);
                assert_eq!(fb.pixel(x, y), Some(Color::Off));
                fb.set_pixel(x, y, Color::Off);
                assert_eq!(fb.pixel(x, y), Some(Color::Off));
            }
        }
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_addressing_is_page_then_column() {
        let mut fb = blank();
        fb.set_pixel(3, 0, Color::On);
        fb.set_pixel(3, 9, Color::On);
        fb.set_pixel(127, 63, Color::On);

        let bytes = fb.as_bytes();
        assert_eq!(bytes[3], 0x01);
        assert_eq!(bytes[128 + 3], 0x02);
        assert_eq!(bytes[7 * 128 + 127], 0x80);
        assert_eq!(bytes.iter().filter(|b| **b != 0).count(), 3);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = blank();
        fb.draw_string(0, 0, "XYZ");
        let before = *fb.as_bytes().first_chunk::<1024>().unwrap();

        for (x, y) in [(-1, 0), (0, -1), (W, 0), (0, H), (W, H), (i32::MIN, i32::MAX)] {
            fb.set_pixel(x, y, Color::On);
            fb.set_pixel(x, y, Color::Off);
            assert_eq!(fb.pixel(x, y), None);
        }

        assert_eq!(fb.as_bytes(), &before[..]);
    }

    #[test]
    fn test_clear_turns_everything_off() {
        let mut fb = Framebuffer::new(Dimensions::default(), [0xA5u8; 1024]).unwrap();
        fb.clear();
        for y in 0..H {
            for x in 0..W {
                assert_eq!(fb.pixel(x, y), Some(Color::Off));
            }
        }
    }

    #[test]
    fn test_fill_on() {
        let mut fb = blank();
        fb.fill(Color::On);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_hline_sets_exactly_one_row() {
        let mut fb = blank();
        fb.draw_hline(0, 0, W as u32, Color::On);
        for y in 0..H {
            for x in 0..W {
                let expected = if y == 0 { Color::On } else { Color::Off };
                assert_eq!(fb.pixel(x, y), Some(expected));
            }
        }
        assert_eq!(fb.page(0), Some(&[0x01u8; 128][..]));
    }

    #[test]
    fn test_vline_and_clipping() {
        let mut fb = blank();
        fb.draw_vline(W - 1, -10, 20, Color::On);
        for y in 0..H {
            let expected = if y < 10 { Color::On } else { Color::Off };
            assert_eq!(fb.pixel(W - 1, y), Some(expected));
        }
        fb.draw_hline(W - 4, 5, 100, Color::Off);
        assert_eq!(fb.pixel(W - 1, 5), Some(Color::Off));
        assert_eq!(fb.pixel(W - 1, 4), Some(Color::On));
    }

    #[test]
    fn test_border_frame() {
        let mut fb = blank();
        fb.draw_hline(0, 0, W as u32, Color::On);
        fb.draw_hline(0, H - 1, W as u32, Color::On);
        fb.draw_vline(0, 0, H as u32, Color::On);
        fb.draw_vline(W - 1, 0, H as u32, Color::On);

        let lit = (0..H)
            .flat_map(|y| (0..W).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == Some(Color::On))
            .count();
        assert_eq!(lit, 2 * 128 + 2 * 64 - 4);
    }

    #[test]
    fn test_draw_char_writes_glyph_and_spacing() {
        let mut fb = blank();
        fb.fill(Color::On);
        fb.draw_string(10, 3, "A");

        let glyph = font::glyph(b'A').unwrap();
        for col in 0..6 {
            for row in 0..8 {
                let expected = col < 5 && glyph[col as usize] & (1 << row) != 0;
                assert_eq!(
                    fb.pixel(10 + col, 3 + row),
                    Some(Color::from(expected)),
                    "col {col} row {row}"
                );
            }
        }
        // Outside the 6x8 cell is untouched
        assert_eq!(fb.pixel(9, 3), Some(Color::On));
        assert_eq!(fb.pixel(16, 3), Some(Color::On));
        assert_eq!(fb.pixel(10, 2), Some(Color::On));
        assert_eq!(fb.pixel(10, 11), Some(Color::On));
    }

    #[test]
    fn test_char_on_page_boundary_matches_glyph_bytes() {
        let mut fb = blank();
        fb.draw_char(0, 8, b'Z');
        let page = fb.page(1).unwrap();
        assert_eq!(&page[..5], font::glyph(b'Z').unwrap());
        assert_eq!(page[5], 0x00);
    }

    #[test]
    fn test_undefined_glyph_draws_nothing_but_advances() {
        let mut fb = blank();
        fb.fill(Color::On);
        fb.draw_char(0, 0, b'~');
        fb.draw_char(0, 0, 0x7F);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));

        fb.clear();
        fb.draw_string(0, 0, "a!");
        assert!(fb.page(0).unwrap()[..6].iter().all(|b| *b == 0));
        assert_eq!(&fb.page(0).unwrap()[6..11], font::glyph(b'!').unwrap());
    }

    #[test]
    fn test_string_advances_six_columns_and_clips() {
        let mut fb = blank();
        fb.draw_string(120, 0, "HI");
        let page = fb.page(0).unwrap();
        assert_eq!(&page[120..125], font::glyph(b'H').unwrap());
        assert_eq!(page[125], 0x00);
        // 'I' starts at 126 and only its first two columns are visible
        assert_eq!(&page[126..128], &font::glyph(b'I').unwrap()[..2]);
    }

    #[test]
    fn test_release_returns_storage() {
        let mut fb = blank();
        fb.set_pixel(0, 0, Color::On);
        let storage = fb.release();
        assert_eq!(storage[0], 0x01);
    }
}
