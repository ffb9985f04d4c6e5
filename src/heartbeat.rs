//! The repeated loop phase: blink the backlight and count cycles.

use embedded_hal::digital::StatefulOutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::Backlight;

/// How long the backlight stays lit and dark in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkTiming {
    pub on_ms: u32,
    pub off_ms: u32,
}

impl BlinkTiming {
    /// One second lit, one second dark.
    pub const DEFAULT: Self = Self {
        on_ms: 1000,
        off_ms: 1000,
    };

    pub const fn period_ms(&self) -> u32 {
        self.on_ms.saturating_add(self.off_ms)
    }
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Drives the backlight through repeated on/off cycles.
pub struct Heartbeat<P, D> {
    backlight: Backlight<P>,
    delay: D,
    timing: BlinkTiming,
    count: u32,
}

impl<P, D> Heartbeat<P, D>
where
    P: StatefulOutputPin,
    D: DelayNs,
{
    pub const fn new(backlight: Backlight<P>, delay: D, timing: BlinkTiming) -> Self {
        Self {
            backlight,
            delay,
            timing,
            count: 0,
        }
    }

    /// Run one full on/off cycle and return the updated cycle count.
    ///
    /// A failed pin write ends the cycle early and leaves the count as it was.
    pub async fn beat(&mut self) -> Result<u32, P::Error> {
        self.backlight.on()?;
        self.delay.delay_ms(self.timing.on_ms).await;
        self.backlight.off()?;
        self.delay.delay_ms(self.timing.off_ms).await;

        self.count = self.count.saturating_add(1);
        Ok(self.count)
    }

    /// Completed cycles so far.
    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn timing(&self) -> BlinkTiming {
        self.timing
    }

    pub fn release(self) -> (Backlight<P>, D) {
        (self.backlight, self.delay)
    }
}
