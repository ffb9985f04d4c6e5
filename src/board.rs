//! ESP32-C6 bring-up: pin assignment and chip initialisation.

use defmt::info;
use esp_hal::{
    assign_resources,
    clock::CpuClock,
};

/// Moves a value into a fresh `static` and returns `&'static mut` to it.
///
/// Each expansion owns its own cell, so a given call site may run only once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────
//
// Keep in step with `crate::pins`. The panel lines (GPIO2, 6, 7, 8, 10)
// stay unclaimed until there is a display driver to hand them to.

assign_resources! {
    pub Resources<'d> {
        backlight: BacklightResources<'d> {
            led: GPIO3,
        }
    }
}

/// Initialise the chip and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use [`split_resources!`] to
/// take the board's resource groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);
    info!("ESP32-C6 initialised");
    peripherals
}
