//! Boot text printed over serial during setup.

/// Firmware version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SEPARATOR: &str = "====================================";
pub const TITLE: &str = concat!("Lumy Firmware v", env!("CARGO_PKG_VERSION"));
pub const SUBTITLE: &str = "ESP32-C6 Test Program";

/// Framed title block, printed first.
pub const HEADER: [&str; 4] = [SEPARATOR, TITLE, SUBTITLE, SEPARATOR];

/// Printed once the backlight line is configured and lit.
pub const READY: &str = "Backlight initialized";

pub const WELCOME: &str = "Welcome to Lumy!";

/// Outstanding bring-up work, printed as a numbered list after [`WELCOME`].
pub const NEXT_STEPS: [&str; 3] = [
    "Bring up the ST7789 panel driver over SPI",
    "Configure the 172x320 panel geometry and offsets",
    "Display 'Welcome to Lumy' on screen",
];
