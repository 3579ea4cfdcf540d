#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

pub const ADDRESS: u8 = 0x48;

/// Expected scan writes for a bus where only `present` acknowledge
pub fn scan_expectations(present: &[u8]) -> Vec<I2cTransaction> {
    scan_expectations_failing_with(
        present,
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
    )
}

/// Same, with empty addresses reporting `error` instead of a NACK
pub fn scan_expectations_failing_with(present: &[u8], error: ErrorKind) -> Vec<I2cTransaction> {
    (0x03..=0x77u8)
        .map(|address| {
            let write = I2cTransaction::write(address, vec![]);
            if present.contains(&address) {
                write
            } else {
                write.with_error(error)
            }
        })
        .collect()
}

/// Bus traffic of one measurement, as seen by the recording double
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    ConfigWrite(u8),
    Wait,
    PointerWrite,
    Read,
}

/// Transport double that records every transfer and delay in order
#[derive(Clone, Default)]
pub struct Recorder {
    pub events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    pub fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn record_write(&self, bytes: &[u8]) {
        match bytes {
            [0x01, options, 0x03] => self.push(Event::ConfigWrite(*options)),
            [0x00] => self.push(Event::PointerWrite),
            other => panic!("unexpected write {:02X?}", other),
        }
    }

    pub fn record_read(&self, buffer: &mut [u8]) {
        assert_eq!(buffer.len(), 2);
        // half of the positive range
        buffer.copy_from_slice(&[0x40, 0x00]);
        self.push(Event::Read);
    }

    /// Asserts the log is made of complete, non-interleaved measurements
    pub fn assert_serialized(&self, measurements: usize) {
        let events = self.events.lock().unwrap();
        assert_eq!(events.len(), measurements * 4);
        for chunk in events.chunks(4) {
            assert!(
                matches!(
                    chunk,
                    [Event::ConfigWrite(_), Event::Wait, Event::PointerWrite, Event::Read]
                ),
                "interleaved measurement: {:?}",
                chunk
            );
        }
    }
}
