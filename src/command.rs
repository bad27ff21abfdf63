//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control SSD1306-class OLED
//! controllers (SSD1306, SH1106 and friends). On the I²C bus every command is
//! sent in its own transaction, prefixed by the [`CONTROL_COMMAND`] control
//! byte; pixel data is prefixed by [`CONTROL_DATA`].
//!
//! Several commands take an argument byte that is sent as a *separate*
//! command transaction straight after the opcode. The controller interprets
//! the next byte it receives as that argument, so the order of an init
//! sequence is part of the hardware contract.
//!
//! ## Example
//!
//! ```
//! use ssd1306_mono::{command, Builder};
//!
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let sequence = command::init_sequence(&config);
//! assert_eq!(sequence.first(), Some(&command::DISPLAY_OFF));
//! assert_eq!(sequence.last(), Some(&command::DISPLAY_ON));
//! ```

use crate::config::Config;

// I²C control bytes

/// Control byte announcing that the following byte is a command (0x00)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing that the following bytes are display RAM data (0x40)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 argument byte: contrast, 0x00-0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal (non-inverted) display (0xA6)
///
/// A set RAM bit lights the pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display (0xA7)
///
/// A cleared RAM bit lights the pixel.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, controller enters sleep (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Requires 1 argument byte:
/// - 0x00: horizontal
/// - 0x01: vertical
/// - 0x02: page
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode argument for [`MEMORY_MODE`]
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set lower column start address for page addressing (0x00-0x0F)
///
/// The low nibble of the column is OR-ed into the opcode.
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Set higher column start address for page addressing (0x10-0x1F)
///
/// The high nibble of the column is OR-ed into the opcode.
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Set page start address for page addressing (0xB0-0xB7)
///
/// The page number is added to the opcode.
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

// Hardware configuration commands

/// Set display start line (0x40-0x7F)
///
/// The start line is OR-ed into the opcode.
pub const SET_START_LINE: u8 = 0x40;

/// Segment re-map, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP: u8 = 0xA1;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 argument byte: number of rows - 1.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction, remapped (0xC8)
///
/// Scans from COM[N-1] to COM0 so row 0 sits at the top of most modules.
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Requires 1 argument byte: vertical shift.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 argument byte:
/// - 0x02: sequential COM pins (32-row panels)
/// - 0x12: alternative COM pins (64-row panels)
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 argument byte.
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 argument byte: phase 2 in the high nibble, phase 1 in the low nibble.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 argument byte.
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Requires 1 argument byte: 0x14 = enable, 0x10 = disable.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable argument for [`CHARGE_PUMP`]
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Number of bytes in the init sequence produced by [`init_sequence`]
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Build the power-on command sequence for a configuration
///
/// Every byte is sent as its own command transaction. With the default
/// configuration this is the well-known 25-byte SSD1306 sequence for a
/// 128x64 module with internal charge pump:
///
/// ```text
/// AE D5 80 A8 3F D3 00 40 8D 14 20 00 A1 C8 DA 12 81 CF D9 F1 DB 40 A4 A6 AF
/// ```
pub fn init_sequence(config: &Config) -> [u8; INIT_SEQUENCE_LEN] {
    let rows = config.dimensions.height;
    let com_pins = if rows > 32 { 0x12 } else { 0x02 };

    [
        DISPLAY_OFF,
        SET_CLOCK_DIV,
        config.clock_div,
        SET_MULTIPLEX,
        rows.saturating_sub(1) as u8,
        SET_DISPLAY_OFFSET,
        0x00,
        SET_START_LINE,
        CHARGE_PUMP,
        CHARGE_PUMP_ENABLE,
        MEMORY_MODE,
        MEMORY_MODE_HORIZONTAL,
        SEGMENT_REMAP,
        COM_SCAN_DEC,
        SET_COM_PINS,
        com_pins,
        SET_CONTRAST,
        config.contrast,
        SET_PRECHARGE,
        config.precharge,
        SET_VCOM_DETECT,
        config.vcomh,
        DISPLAY_ALL_ON_RESUME,
        NORMAL_DISPLAY,
        DISPLAY_ON,
    ]
}

/// Page/column addressing commands that precede one page of flushed data
///
/// Returns `[page address, low column nibble, high column nibble]`.
pub fn page_start(page: u8, column: u8) -> [u8; 3] {
    [
        SET_PAGE_ADDRESS + page,
        SET_LOW_COLUMN | (column & 0x0F),
        SET_HIGH_COLUMN | (column >> 4),
    ]
}
