use crate::constants::{Gain, NEGATIVE_FULL_SCALE, POSITIVE_FULL_SCALE};

/// One decoded conversion result
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    code: i16,
    voltage: f64,
    gain: Gain,
    full_scale: bool,
}

impl Reading {
    /// Signed 12-bit ADC code, -2048..=2047
    pub fn code(&self) -> i16 {
        self.code
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    pub fn gain(&self) -> Gain {
        self.gain
    }

    /// The input was outside the selected range and the voltage is clipped
    pub fn is_full_scale(&self) -> bool {
        self.full_scale
    }
}

/// Converts the two bytes of the conversion register into a voltage
///
/// The first byte holds the 8 most significant bits of the result, the top
/// nibble of the second byte the 4 least significant ones. The low nibble is
/// reserved and always zero.
pub fn decode(bytes: [u8; 2], gain: Gain) -> Reading {
    let mut raw = (bytes[0] as u16) << 4 | (bytes[1] as u16) >> 4;

    let full_scale = raw == POSITIVE_FULL_SCALE || raw == NEGATIVE_FULL_SCALE;
    if full_scale {
        log::warn!("Full scale reached: 0x{:03X} with {:?}", raw, gain);
    }

    // Sign extension for negative values
    if raw > POSITIVE_FULL_SCALE {
        raw |= 0xF000;
    }
    let code = raw as i16;

    // bit 11 is the sign, which leaves 11 bits (2048 steps) of magnitude
    let voltage = gain.full_scale_volts() * code as f64 / 2048.0;

    Reading {
        code,
        voltage,
        gain,
        full_scale,
    }
}
