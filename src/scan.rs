//! Bus enumeration.
//!
//! Each address is tried with a zero-length write. Anything but an
//! acknowledge means the address is empty: Linux i2c-dev reports a missing
//! device as a plain I/O error rather than a NACK. Only bus faults and lost
//! arbitration abort the scan. Reads are never used, since a device holding
//! SDA low with no one clocking it out can lock up the bus.

use embedded_hal::i2c::{Error, ErrorKind};

/// Addresses tried, the same window the Linux scanning tools use
pub const SCAN_FIRST: u8 = 0x03;
pub const SCAN_LAST: u8 = 0x77;

/// Set of 7-bit addresses that acknowledged an empty write
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Devices(u128);

impl Devices {
    /// Addresses above 0x7F are not 7-bit addresses and are ignored
    pub fn insert(&mut self, address: u8) {
        if address < 0x80 {
            self.0 |= 1u128 << address;
        }
    }

    pub fn contains(&self, address: u8) -> bool {
        address < 0x80 && self.0 & (1u128 << address) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..0x80u8).filter(move |address| self.contains(*address))
    }
}

impl FromIterator<u8> for Devices {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut devices = Devices::default();
        for address in iter {
            devices.insert(address);
        }
        devices
    }
}

/// Interprets the outcome of the empty write to one address
fn address_answered<E: Error>(result: Result<(), E>) -> Result<bool, E> {
    match result {
        Ok(()) => Ok(true),
        Err(e) => match e.kind() {
            ErrorKind::Bus | ErrorKind::ArbitrationLoss => Err(e),
            _ => Ok(false),
        },
    }
}

/// Lists the devices answering on the bus
pub fn scan<I2C: embedded_hal::i2c::I2c>(i2c: &mut I2C) -> Result<Devices, I2C::Error> {
    let mut devices = Devices::default();
    for address in SCAN_FIRST..=SCAN_LAST {
        if address_answered(i2c.write(address, &[]))? {
            devices.insert(address);
        }
    }
    log::debug!("Bus scan found {} device(s)", devices.len());
    Ok(devices)
}

/// Lists the devices answering on the bus
#[cfg(feature = "async")]
pub async fn scan_async<I2C: embedded_hal_async::i2c::I2c>(
    i2c: &mut I2C,
) -> Result<Devices, I2C::Error> {
    let mut devices = Devices::default();
    for address in SCAN_FIRST..=SCAN_LAST {
        if address_answered(i2c.write(address, &[]).await)? {
            devices.insert(address);
        }
    }
    log::debug!("Bus scan found {} device(s)", devices.len());
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::NoAcknowledgeSource;

    #[test]
    fn devices_set() {
        let devices: Devices = [0x48, 0x03, 0x77].into_iter().collect();
        assert_eq!(devices.len(), 3);
        assert!(devices.contains(0x48));
        assert!(!devices.contains(0x49));
        assert!(!devices.contains(0xC8));
        assert!(Devices::default().is_empty());
        assert_eq!(devices.iter().collect::<Vec<_>>(), vec![0x03, 0x48, 0x77]);
    }

    #[test]
    fn out_of_range_addresses_are_ignored() {
        let devices: Devices = [0xC8, 0xFF].into_iter().collect();
        assert!(devices.is_empty());
        assert!(!devices.contains(0x48));
        assert!(!devices.contains(0x7F));
    }

    #[test]
    fn failed_write_means_empty_address() {
        let nack: Result<(), ErrorKind> =
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        assert_eq!(address_answered(nack), Ok(false));
        assert_eq!(address_answered::<ErrorKind>(Ok(())), Ok(true));
        assert_eq!(address_answered::<ErrorKind>(Err(ErrorKind::Other)), Ok(false));
        assert_eq!(address_answered::<ErrorKind>(Err(ErrorKind::Overrun)), Ok(false));
        assert_eq!(
            address_answered::<ErrorKind>(Err(ErrorKind::ArbitrationLoss)),
            Err(ErrorKind::ArbitrationLoss)
        );
        assert_eq!(
            address_answered::<ErrorKind>(Err(ErrorKind::Bus)),
            Err(ErrorKind::Bus)
        );
    }
}
