//! # lumy
//!
//! Bring-up firmware for the Lumy display board, a Waveshare ESP32-C6 with
//! a 1.47" 172×320 ST7789 LCD.
//!
//! The board logic is small:
//! - **Pins**: the board's GPIO map and panel geometry
//! - **Banner**: the boot text printed over serial
//! - **Backlight**: the single output line powering the panel's light source
//! - **Heartbeat**: the repeated on/off cycle with its counter
//!
//! Everything except the `board` module is generic over `embedded-hal`
//! traits and builds for the host, so it can be tested without hardware.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = lumy::init();
//! let resources = lumy::split_resources!(peripherals);
//!
//! let backlight: lumy::BoardBacklight = resources.backlight.into();
//! let mut heartbeat = lumy::Heartbeat::new(backlight, embassy_time::Delay, lumy::BlinkTiming::DEFAULT);
//! let count = heartbeat.beat().await?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod backlight;
pub mod banner;
mod heartbeat;
pub mod pins;

#[cfg(feature = "board")]
mod board;

#[cfg(test)]
mod mock;

pub use backlight::Backlight;
#[cfg(feature = "board")]
pub use backlight::BoardBacklight;
#[cfg(feature = "board")]
pub use board::{
    BacklightResources,
    Resources,
    init,
};
pub use heartbeat::{
    BlinkTiming,
    Heartbeat,
};
