//! Core display operations

use crate::color::Color;
use crate::command::{
    self, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, NORMAL_DISPLAY, SET_CONTRAST,
};
use crate::config::{Config, Dimensions, FlushMode};
use crate::error::{BuilderError, Error};
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Controller lifecycle
///
/// There is no way back to `Uninitialized`; a failed [`Display::init`] simply
/// leaves the state where it was.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Power-on state, before the init sequence completed
    #[default]
    Uninitialized,
    /// Init sequence completed; the panel accepts frames
    Active,
}

/// Buffered driver for an SSD1306-class OLED
///
/// Owns the bus interface, the configuration and the framebuffer. Drawing
/// only touches the framebuffer; nothing reaches the panel until
/// [`flush`](Self::flush).
///
/// ## Example
///
/// ```rust,no_run
/// use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// use ssd1306_mono::{Builder, Color, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let config = match Builder::new().build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let interface = I2cInterface::new(MockI2c, config.address);
/// let mut display = match Display::new(interface, config, [0u8; 1024]) {
///     Ok(display) => display,
///     Err(_) => return,
/// };
///
/// if display.init().is_err() {
///     return;
/// }
/// display.clear();
/// display.draw_hline(0, 0, 128, Color::On);
/// display.draw_string(0, 8, "HELLO");
/// let _ = display.flush();
/// ```
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pixel storage mirrored to the controller by `flush`
    framebuffer: Framebuffer<B>,
    /// Lifecycle state
    state: State,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance around `buffer`
    ///
    /// Does not talk to the controller; call [`init`](Self::init) next.
    ///
    /// # Errors
    ///
    /// - Any error of [`Config::validate`]; `config` may have been edited
    ///   after [`Builder::build`](crate::config::Builder::build)
    /// - `BuilderError::BufferTooSmall` if `buffer` cannot hold
    ///   `config.dimensions.buffer_size()` bytes
    pub fn new(interface: I, config: Config, buffer: B) -> Result<Self, BuilderError> {
        config.validate()?;
        let framebuffer = Framebuffer::new(config.dimensions, buffer)?;
        Ok(Self {
            interface,
            config,
            framebuffer,
            state: State::Uninitialized,
        })
    }

    /// Send the power-on command sequence
    ///
    /// Stops at the first failed transaction and returns it; the display
    /// stays [`State::Uninitialized`] and `init` may be retried.
    pub fn init(&mut self) -> DisplayResult<I> {
        log::debug!(
            "init {}x{} panel at {:#04x}",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.address
        );
        for cmd in command::init_sequence(&self.config) {
            self.send_command(cmd)?;
        }
        self.state = State::Active;
        Ok(())
    }

    /// Transmit the framebuffer to the panel
    ///
    /// For every page: select the page, set the start column to the configured
    /// offset, then write the page's `width` bytes. The framebuffer is only
    /// read.
    ///
    /// # Errors
    ///
    /// - `Error::NotInitialized` if [`init`](Self::init) has not succeeded
    /// - `Error::Interface` for the first failed transaction; the rest of the
    ///   frame is not sent
    pub fn flush(&mut self) -> DisplayResult<I> {
        self.ensure_active()?;

        let Self {
            interface,
            config,
            framebuffer,
            ..
        } = &mut *self;
        // Validated dimensions: the buffer is exactly `pages` rows of `width`
        let width = config.dimensions.width as usize;
        for (page, data) in framebuffer.as_bytes().chunks_exact(width).enumerate() {
            for cmd in command::page_start(page as u8, config.column_offset) {
                interface
                    .send_command(cmd)
                    .map_err(|e| Self::command_failed(cmd, e))?;
            }

            match config.flush_mode {
                FlushMode::Bulk => {
                    interface
                        .send_data(data)
                        .map_err(|e| Self::data_failed(page, e))?;
                }
                FlushMode::PerByte => {
                    for byte in data {
                        interface
                            .send_data(core::slice::from_ref(byte))
                            .map_err(|e| Self::data_failed(page, e))?;
                    }
                }
            }
        }

        log::debug!("flushed {} pages", self.config.dimensions.pages());
        Ok(())
    }

    /// Set panel contrast
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.ensure_active()?;
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast)
    }

    /// Invert the panel (unlit buffer bits light up)
    ///
    /// The framebuffer is not modified.
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ensure_active()?;
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Switch the panel on, or off into sleep
    ///
    /// Display RAM is kept while off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ensure_active()?;
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Turn every pixel in the framebuffer off
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Set one pixel in the framebuffer; off-panel coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.framebuffer.set_pixel(x, y, color);
    }

    /// Draw `length` pixels rightwards from `(x, y)`
    pub fn draw_hline(&mut self, x: i32, y: i32, length: u32, color: Color) {
        self.framebuffer.draw_hline(x, y, length, color);
    }

    /// Draw `length` pixels downwards from `(x, y)`
    pub fn draw_vline(&mut self, x: i32, y: i32, length: u32, color: Color) {
        self.framebuffer.draw_vline(x, y, length, color);
    }

    /// Draw one 6x8 character cell at `(x, y)`
    pub fn draw_char(&mut self, x: i32, y: i32, ch: u8) {
        self.framebuffer.draw_char(x, y, ch);
    }

    /// Draw a single line of text at `(x, y)`
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        self.framebuffer.draw_string(x, y, text);
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Access the framebuffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Give back the interface and the framebuffer storage
    pub fn release(self) -> (I, B) {
        (self.interface, self.framebuffer.release())
    }

    fn ensure_active(&self) -> DisplayResult<I> {
        match self.state {
            State::Active => Ok(()),
            State::Uninitialized => Err(Error::NotInitialized),
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface
            .send_command(cmd)
            .map_err(|e| Self::command_failed(cmd, e))
    }

    fn command_failed(cmd: u8, e: I::Error) -> Error<I> {
        log::warn!("command {cmd:#04x} failed: {e:?}");
        Error::Interface(e)
    }

    fn data_failed(page: usize, e: I::Error) -> Error<I> {
        log::warn!("data write for page {page} failed: {e:?}");
        Error::Interface(e)
    }
}
