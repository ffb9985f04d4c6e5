//! Display backlight control.

use embedded_hal::digital::StatefulOutputPin;

/// Controls the display backlight LED.
///
/// The pin must already be configured as an output; on the board that is
/// done by the `From<BacklightResources>` conversion.
pub struct Backlight<P> {
    pin: P,
}

impl<P: StatefulOutputPin> Backlight<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }

    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.pin.toggle()
    }

    /// Reads back the level the line is currently driven to.
    pub fn is_on(&mut self) -> Result<bool, P::Error> {
        self.pin.is_set_high()
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(feature = "board")]
mod board {
    use esp_hal::gpio::{
        Level,
        Output,
        OutputConfig,
    };

    use super::Backlight;
    use crate::BacklightResources;

    /// The board backlight on GPIO3.
    pub type BoardBacklight = Backlight<Output<'static>>;

    impl From<BacklightResources<'static>> for BoardBacklight {
        fn from(res: BacklightResources<'static>) -> Self {
            // Default to backlight ON
            Backlight::new(Output::new(res.led, Level::High, OutputConfig::default()))
        }
    }
}

#[cfg(feature = "board")]
pub use board::BoardBacklight;
