//! Driver for the TI ADS1015 12-bit I2C ADC, single-shot conversions only.
//!
//! Datasheet: <https://www.ti.com/lit/ds/symlink/ads1015.pdf>

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod config;
mod constants;
#[cfg(not(feature = "async"))]
mod driver;

#[cfg(feature = "async")]
mod driver_async;

mod error;
mod sample;
mod scan;

pub use config::Config;
pub use constants::{Channel, Gain, CONVERSION_DELAY_MS, DEFAULT_ADDRESS, DEFAULT_BUS};

#[cfg(not(feature = "async"))]
pub use driver::Ads1015;

#[cfg(feature = "async")]
pub use driver_async::Ads1015;

pub use error::Ads1015Error;
pub use sample::{decode, Reading};
pub use scan::{scan, Devices};

#[cfg(feature = "async")]
pub use scan::scan_async;
