use crate::constants::*;

/// Contents of a config register write that starts one single-shot conversion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub channel: Channel,
    pub gain: Gain,
}

impl Config {
    pub const fn new(channel: Channel, gain: Gain) -> Self {
        Config { channel, gain }
    }

    /// High byte: start bit, MUX, PGA and mode. Low byte: `DEFAULT_OPTIONS`.
    pub const fn to_bytes(self) -> [u8; 2] {
        let options =
            BEGIN_SINGLE_CONVERSION | self.channel.bits() | self.gain.bits() | MODE_SINGLE_SHOT;
        [options, DEFAULT_OPTIONS]
    }

    pub const fn to_word(self) -> u16 {
        u16::from_be_bytes(self.to_bytes())
    }
}
