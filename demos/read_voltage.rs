// demos/read_voltage.rs
//
// Uses the blocking driver: `Ads1015::open` does not exist with `async`,
// since rppal only provides blocking I2C.

#[cfg(feature = "async")]
compile_error!("read_voltage needs the blocking driver, build it without the `async` feature");

use std::thread;
use std::time::Duration;

use ads1015::{Ads1015, Channel, Gain, DEFAULT_ADDRESS, DEFAULT_BUS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bus number: {}", DEFAULT_BUS);
    println!("Device address: 0x{:02x}", DEFAULT_ADDRESS);
    println!("Gain One: {}", Gain::One.full_scale_volts());
    println!("Channel Two: 0b{:08b}", Channel::Two.bits());

    // Open /dev/i2c-1 and make sure the ADC answers at 0x48
    let mut adc = Ads1015::open(DEFAULT_BUS, DEFAULT_ADDRESS)?;

    for gain in Gain::ALL {
        let reading = adc.read(Channel::Zero, gain)?;
        println!(
            "{:?}: {:.4} V{}",
            gain,
            reading.voltage(),
            if reading.is_full_scale() { " (clipped)" } else { "" }
        );
    }

    loop {
        println!("{:.4} V", adc.measure(Channel::Zero, Gain::One)?);
        thread::sleep(Duration::from_millis(500));
    }
}
