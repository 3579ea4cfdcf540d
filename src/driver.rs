use crate::config::Config;
use crate::constants::*;
use crate::error::Ads1015Error;
use crate::sample::{decode, Reading};
use crate::scan::scan;
use core::result::Result;
use core::result::Result::Ok;

use embedded_hal::{delay::DelayNs, i2c::I2c};

/// ADS1015 driver, bound to one device address on one bus
///
/// Every measurement borrows the driver mutably, so conversions on the same
/// device never overlap. Share it behind a mutex held for the whole call.
pub struct Ads1015<I2C, DELAY> {
    i2c: I2C,
    delay: DELAY,
    address: u8,
}

impl<I2C, DELAY, I2cError> Ads1015<I2C, DELAY>
where
    I2C: I2c<Error = I2cError>,
    DELAY: DelayNs,
{
    /// Binds the driver to `address` without checking that anything answers there
    pub fn new(i2c: I2C, delay: DELAY, address: u8) -> Self {
        Ads1015 {
            i2c,
            delay,
            address,
        }
    }

    /// Enumerates the bus and binds the driver if `address` acknowledged
    pub fn init(mut i2c: I2C, delay: DELAY, address: u8) -> Result<Self, Ads1015Error<I2cError>> {
        let devices = scan(&mut i2c).map_err(Ads1015Error::I2c)?;

        if !devices.contains(address) {
            log::debug!("0x{:02X} not among {:?}", address, devices);
            return Err(Ads1015Error::DeviceNotFound(address));
        }

        Ok(Self::new(i2c, delay, address))
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Gives back the bus and the delay provider
    pub fn release(self) -> (I2C, DELAY) {
        (self.i2c, self.delay)
    }

    /// Runs one single-shot conversion and returns the input voltage
    pub fn measure(&mut self, channel: Channel, gain: Gain) -> Result<f64, Ads1015Error<I2cError>> {
        Ok(self.read(channel, gain)?.voltage())
    }

    /// Runs one single-shot conversion and returns the full reading
    pub fn read(&mut self, channel: Channel, gain: Gain) -> Result<Reading, Ads1015Error<I2cError>> {
        self.start_conversion(Config::new(channel, gain))?;

        // Wait for the conversion to finish
        self.delay.delay_ms(CONVERSION_DELAY_MS);

        let bytes = self.read_conversion()?;
        Ok(decode(bytes, gain))
    }

    /// Writes the config register, which also starts the conversion
    fn start_conversion(&mut self, config: Config) -> Result<(), Ads1015Error<I2cError>> {
        let [options, defaults] = config.to_bytes();
        log::debug!("Writing config: 0x{:04X}", config.to_word());
        self.i2c
            .write(self.address, &[CONFIG_REGISTER, options, defaults])
            .map_err(Ads1015Error::I2c)
    }

    /// Points the device at the conversion register, then reads it
    fn read_conversion(&mut self) -> Result<[u8; 2], Ads1015Error<I2cError>> {
        self.i2c
            .write(self.address, &[CONVERSION_REGISTER])
            .map_err(Ads1015Error::I2c)?;

        let mut buffer = [0u8; 2];
        self.i2c
            .read(self.address, &mut buffer)
            .map_err(Ads1015Error::I2c)?;

        log::debug!("Raw data: {:02X} {:02X}", buffer[0], buffer[1]);
        Ok(buffer)
    }
}

#[cfg(feature = "rppal")]
impl Ads1015<rppal::i2c::I2c, rppal::hal::Delay> {
    /// Opens `/dev/i2c-<bus>` and binds the driver to `address`
    pub fn open(bus: u8, address: u8) -> Result<Self, Ads1015Error<rppal::i2c::Error>> {
        let i2c = rppal::i2c::I2c::with_bus(bus).map_err(Ads1015Error::I2c)?;
        Self::init(i2c, rppal::hal::Delay::new(), address)
    }
}
