/// Default I2C bus number on a Raspberry Pi
pub const DEFAULT_BUS: u8 = 1;
/// Default device address when the ADDR pin is connected to GND
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// ADS1015 Registers (both 16 bits wide)
pub const CONVERSION_REGISTER: u8 = 0b00;
pub const CONFIG_REGISTER: u8 = 0b01;

/// Bit 15 of the config register, starts a single conversion when written as 1
pub const BEGIN_SINGLE_CONVERSION: u8 = 0b1000_0000;

/// Operating mode, bit 8 of the config register
pub const MODE_SINGLE_SHOT: u8 = 0b1;

/// Low byte of every config register write:
///   - data rate of 128 samples per second (bits 7 to 5)
///   - traditional comparator with hysteresis (bit 4)
///   - active low comparator polarity (bit 3)
///   - non latching comparator (bit 2)
///   - comparator disabled (bits 1 and 0)
pub const DEFAULT_OPTIONS: u8 = 0b0000_0011;

/// A conversion takes at most 1ms at 128 SPS, wait a lot longer to be safe
pub const CONVERSION_DELAY_MS: u32 = 100;

/// Raw codes the ADC reports when the input is clipped
pub const POSITIVE_FULL_SCALE: u16 = 0x07FF;
pub const NEGATIVE_FULL_SCALE: u16 = 0x0800;

/// Gain settings for the ADS1015 programmable gain amplifier (PGA)
///
/// With `TwoThirds` the input range extends beyond the supply voltage when VDD
/// is above 4V, and neither `TwoThirds` nor `One` (with VDD below 4V) can
/// actually reach a full-scale code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gain {
    /// ±6.144V, the power-on default
    TwoThirds,
    /// ±4.096V
    One,
    /// ±2.048V
    Two,
    /// ±1.024V
    Four,
    /// ±0.512V
    Eight,
    /// ±0.256V
    Sixteen,
}

impl Gain {
    pub const ALL: [Gain; 6] = [
        Gain::TwoThirds,
        Gain::One,
        Gain::Two,
        Gain::Four,
        Gain::Eight,
        Gain::Sixteen,
    ];

    /// PGA bits, already placed at bits 3 to 1 of the config high byte
    pub const fn bits(self) -> u8 {
        match self {
            Gain::TwoThirds => 0b0000_0000,
            Gain::One => 0b0000_0010,
            Gain::Two => 0b0000_0100,
            Gain::Four => 0b0000_0110,
            Gain::Eight => 0b0000_1000,
            Gain::Sixteen => 0b0000_1010,
        }
    }

    /// Returns the ± input range in volts
    pub const fn full_scale_volts(self) -> f64 {
        match self {
            Gain::TwoThirds => 6.144,
            Gain::One => 4.096,
            Gain::Two => 2.048,
            Gain::Four => 1.024,
            Gain::Eight => 0.512,
            Gain::Sixteen => 0.256,
        }
    }
}

/// Input multiplexer settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// AIN0 against GND
    Zero,
    /// AIN1 against GND
    One,
    /// AIN2 against GND
    Two,
    /// AIN3 against GND
    Three,
    /// AIN0 (positive) against AIN1, the power-on default
    ZeroOne,
    /// AIN2 (positive) against AIN3
    TwoThree,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Zero,
        Channel::One,
        Channel::Two,
        Channel::Three,
        Channel::ZeroOne,
        Channel::TwoThree,
    ];

    /// MUX bits, already placed at bits 7 to 4 of the config high byte
    pub const fn bits(self) -> u8 {
        match self {
            Channel::Zero => 0b0100_0000,
            Channel::One => 0b0101_0000,
            Channel::Two => 0b0110_0000,
            Channel::Three => 0b0111_0000,
            Channel::ZeroOne => 0b0000_0000,
            Channel::TwoThree => 0b0011_0000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_bits_are_distinct_three_bit_patterns() {
        for (i, a) in Gain::ALL.iter().enumerate() {
            assert_eq!(a.bits() & !0b0000_1110, 0, "{:?} leaks outside bits 3..1", a);
            for b in &Gain::ALL[i + 1..] {
                assert_ne!(a.bits(), b.bits());
            }
        }
    }

    #[test]
    fn full_scale_shrinks_as_gain_grows() {
        for pair in Gain::ALL.windows(2) {
            assert!(pair[0].bits() < pair[1].bits());
            assert!(pair[0].full_scale_volts() > pair[1].full_scale_volts());
        }
        // every step after 2/3 halves the range
        for pair in Gain::ALL[1..].windows(2) {
            assert_eq!(pair[0].full_scale_volts() / 2.0, pair[1].full_scale_volts());
        }
    }

    #[test]
    fn channel_bits_stay_in_high_nibble() {
        for (i, a) in Channel::ALL.iter().enumerate() {
            assert_eq!(a.bits() & 0x0F, 0);
            for b in &Channel::ALL[i + 1..] {
                assert_ne!(a.bits(), b.bits());
            }
        }
    }

    #[test]
    fn single_ended_channels_set_the_mux_top_bit() {
        for channel in Channel::ALL {
            let single_ended = !matches!(channel, Channel::ZeroOne | Channel::TwoThree);
            assert_eq!(single_ended, channel.bits() & 0b0100_0000 != 0);
        }
    }
}
