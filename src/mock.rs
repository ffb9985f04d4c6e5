//! Host stand-ins for the board's GPIO and delay.

use embedded_hal::digital::{
    Error,
    ErrorKind,
    ErrorType,
    OutputPin,
    StatefulOutputPin,
};
use embedded_hal_async::delay::DelayNs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that records every level it is driven to.
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: Vec<bool>,
    /// Fail every write once this many writes have succeeded.
    pub fail_after: Option<usize>,
}

impl MockPin {
    pub fn new(high: bool) -> Self {
        Self {
            high,
            ..Self::default()
        }
    }

    pub fn failing_after(writes: usize) -> Self {
        Self {
            fail_after: Some(writes),
            ..Self::default()
        }
    }

    fn write(&mut self, level: bool) -> Result<(), PinFault> {
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(PinFault);
        }
        self.high = level;
        self.writes.push(level);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = PinFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        self.write(true)
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, PinFault> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, PinFault> {
        Ok(!self.high)
    }
}

/// Delay that returns immediately and logs the requested waits in ms.
#[derive(Debug, Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}
