//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_HEIGHT, MAX_RAM_COLUMNS, MAX_WIDTH};

/// Default 7-bit I²C address of SSD1306 modules (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Default I²C clock frequency in Hz (standard mode)
pub const DEFAULT_FREQUENCY_HZ: u32 = 100_000;

/// Default bus transaction timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 1_000;

/// Default first visible RAM column
///
/// Common 128x64 modules show a stray column on the right edge when the
/// flush starts at column 0; starting at column 1 avoids it.
pub const DEFAULT_COLUMN_OFFSET: u8 = 1;

/// Highest I²C clock accepted by [`BusConfig`] (fast-mode plus)
pub const MAX_FREQUENCY_HZ: u32 = 1_000_000;

/// Panel dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (number of columns / segments)
    pub width: u16,
    /// Height in pixels (number of rows / COM lines)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or > MAX_WIDTH
    /// - height is 0 or > MAX_HEIGHT
    /// - height % 8 != 0 (rows are packed eight to a page)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_HEIGHT || !height.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
        }
    }
}

/// Two-wire bus settings
///
/// The driver itself only talks to an already configured
/// [`embedded_hal::i2c::I2c`] implementation. These values are validated here
/// and handed to the board code that sets up the I²C peripheral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusConfig {
    /// GPIO number of the data line (SDA)
    pub sda_pin: u8,
    /// GPIO number of the clock line (SCL)
    pub scl_pin: u8,
    /// Bus clock frequency in Hz
    pub frequency_hz: u32,
    /// Per-transaction timeout in milliseconds
    pub timeout_ms: u32,
}

impl BusConfig {
    fn validate(&self) -> Result<(), BuilderError> {
        if self.sda_pin == self.scl_pin {
            return Err(BuilderError::InvalidPins {
                sda: self.sda_pin,
                scl: self.scl_pin,
            });
        }
        if self.frequency_hz == 0 || self.frequency_hz > MAX_FREQUENCY_HZ {
            return Err(BuilderError::InvalidFrequency(self.frequency_hz));
        }
        if self.timeout_ms == 0 {
            return Err(BuilderError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            sda_pin: 18,
            scl_pin: 17,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// How a page of pixel data is put on the bus during a flush
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlushMode {
    /// One data transaction per page carrying `width` bytes
    #[default]
    Bulk,
    /// One data transaction per byte
    ///
    /// Slower, but works with transports that limit the payload length.
    PerByte,
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// 7-bit I²C device address
    pub address: u8,
    /// Bus settings for the board layer
    pub bus: BusConfig,
    /// RAM column written first on each page
    pub column_offset: u8,
    /// Page transfer strategy
    pub flush_mode: FlushMode,
    /// Contrast sent during init
    pub contrast: u8,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_div: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcomh: u8,
}

impl Config {
    /// Check every setting
    ///
    /// `Config` fields are public, so [`Display::new`](crate::display::Display::new)
    /// runs this again on whatever it is handed.
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidDimensions` if the dimensions break the
    ///   [`Dimensions::new`] rules
    /// - `BuilderError::InvalidAddress` if the address is outside the
    ///   non-reserved 7-bit range 0x08..=0x77
    /// - `BuilderError::InvalidColumnOffset` if offset + width exceeds the
    ///   controller RAM
    /// - `BuilderError::InvalidPins`, `InvalidFrequency`, `InvalidTimeout`
    ///   for bad bus settings
    pub fn validate(&self) -> Result<(), BuilderError> {
        let dims = Dimensions::new(self.dimensions.width, self.dimensions.height)?;

        if !(0x08..=0x77).contains(&self.address) {
            return Err(BuilderError::InvalidAddress(self.address));
        }
        if self.column_offset as u16 + dims.width > MAX_RAM_COLUMNS {
            return Err(BuilderError::InvalidColumnOffset {
                offset: self.column_offset,
                width: dims.width,
            });
        }
        self.bus.validate()
    }
}

/// Builder for constructing display configuration
///
/// Every setting has a default matching a common 128x64 module at 0x3C, so
/// `Builder::new().build()` is a working configuration.
///
/// # Example
///
/// ```
/// use ssd1306_mono::{Builder, Dimensions, FlushMode};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .address(0x3D)
///     .column_offset(0)
///     .flush_mode(FlushMode::PerByte)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dimensions.buffer_size(), 512);
/// ```
#[must_use]
pub struct Builder {
    dimensions: Dimensions,
    address: u8,
    bus: BusConfig,
    column_offset: u8,
    flush_mode: FlushMode,
    contrast: u8,
    clock_div: u8,
    precharge: u8,
    vcomh: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            address: DEFAULT_ADDRESS,
            bus: BusConfig::default(),
            column_offset: DEFAULT_COLUMN_OFFSET,
            flush_mode: FlushMode::Bulk,
            // Values below come from the reference init sequence for
            // charge-pump powered 128x64 modules
            contrast: 0xCF,
            clock_div: 0x80,
            precharge: 0xF1,
            vcomh: 0x40,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the 7-bit I²C address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the bus settings
    pub fn bus(mut self, bus: BusConfig) -> Self {
        self.bus = bus;
        self
    }

    /// Set the first visible RAM column
    ///
    /// Defaults to [`DEFAULT_COLUMN_OFFSET`]. Use 0 for bare SSD1306 glass and 2 for
    /// SH1106 controllers.
    pub fn column_offset(mut self, offset: u8) -> Self {
        self.column_offset = offset;
        self
    }

    /// Set the page transfer strategy
    pub fn flush_mode(mut self, mode: FlushMode) -> Self {
        self.flush_mode = mode;
        self
    }

    /// Set the contrast sent during init
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_div(mut self, value: u8) -> Self {
        self.clock_div = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcomh(mut self, value: u8) -> Self {
        self.vcomh = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns the first problem found by [`Config::validate`].
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = Config {
            dimensions: self.dimensions,
            address: self.address,
            bus: self.bus,
            column_offset: self.column_offset,
            flush_mode: self.flush_mode,
            contrast: self.contrast,
            clock_div: self.clock_div,
            precharge: self.precharge,
            vcomh: self.vcomh,
        };
        config.validate()?;
        Ok(config)
    }
}
