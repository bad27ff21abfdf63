//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for talking to an SSD1306-class controller over I²C.
//!
//! ## Wire format
//!
//! Each call is one complete bus transaction (start, address + write bit,
//! payload, stop) to the configured 7-bit address:
//!
//! - command: `[0x00, command]`
//! - data: `[0x40, data...]`
//!
//! Shifting the address and appending the write bit is done by the HAL.
//! Timeouts are enforced by the HAL's I²C peripheral and reported through its
//! error type, see [`BusConfig`](crate::config::BusConfig).
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306_mono::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! let mut interface = I2cInterface::new(MockI2c, 0x3C);
//!
//! // Display off
//! let _ = interface.send_command(0xAE);
//!
//! // One column of pixel data
//! let _ = interface.send_data(&[0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{Error as I2cError, ErrorKind, I2c, Operation, SevenBitAddress};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

/// Trait for the transport to the display controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with anything that can
/// deliver command and data bytes to the controller.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Implement this trait on
/// your own type for other transports or for recording traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails or times out.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send display RAM data to the controller as one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails or times out.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Records which transaction failed along with the HAL error.
#[derive(Debug)]
pub enum InterfaceError<E> {
    /// A command transaction failed
    Command {
        /// Command byte being sent
        command: u8,
        /// HAL error
        source: E,
    },
    /// A data transaction failed
    Data {
        /// Payload length
        len: usize,
        /// HAL error
        source: E,
    },
}

impl<E: I2cError> InterfaceError<E> {
    /// Classify the underlying bus failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Command { source, .. } | Self::Data { source, .. } => source.kind(),
        }
    }
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Command { command, source } => {
                write!(f, "I2C error sending command {command:#04x}: {source:?}")
            }
            Self::Data { len, source } => {
                write!(f, "I2C error sending {len} data bytes: {source:?}")
            }
        }
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// I²C implementation of [`DisplayInterface`]
///
/// ## Type Parameters
///
/// * `I2C` - bus implementing [`embedded_hal::i2c::I2c`]
pub struct I2cInterface<I2C> {
    /// The I²C bus
    i2c: I2C,
    /// 7-bit device address
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface for the device at `address`
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Device address
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(|source| InterfaceError::Command { command, source })
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes are sent back to back with no repeated start
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
            )
            .map_err(|source| InterfaceError::Data {
                len: data.len(),
                source,
            })
    }
}
