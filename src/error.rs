use core::fmt;

#[derive(Debug)]
pub enum Ads1015Error<I2cError> {
    /// The bus transport failed during a write or read
    I2c(I2cError),
    /// Nothing acknowledged the given address while enumerating the bus
    DeviceNotFound(u8),
}

impl<I2cError: fmt::Debug> fmt::Display for Ads1015Error<I2cError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ads1015Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Ads1015Error::DeviceNotFound(address) => {
                write!(f, "No device found at address 0x{:02X}", address)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<I2cError: fmt::Debug> std::error::Error for Ads1015Error<I2cError> {}
