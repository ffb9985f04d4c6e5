//! GPIO map and panel geometry for the Waveshare ESP32-C6 1.47" LCD.
//!
//! Only [`LCD_BL`] is driven today. The panel lines are recorded so the
//! ST7789 bring-up has one place to read them from.

/// Backlight enable.
pub const LCD_BL: u8 = 3;
/// Panel reset.
pub const LCD_RST: u8 = 8;
/// Panel data/command select.
pub const LCD_DC: u8 = 2;
/// Panel chip select.
pub const LCD_CS: u8 = 10;
/// SPI clock.
pub const LCD_SCLK: u8 = 6;
/// SPI MOSI.
pub const LCD_MOSI: u8 = 7;

/// Panel width in pixels (portrait).
pub const LCD_WIDTH: u16 = 172;
/// Panel height in pixels (portrait).
pub const LCD_HEIGHT: u16 = 320;

/// Highest GPIO number on the ESP32-C6.
pub const MAX_GPIO: u8 = 30;

/// Panel pins in the order DC, RST, CS, SCLK, MOSI.
pub const PANEL_PINS: [u8; 5] = [LCD_DC, LCD_RST, LCD_CS, LCD_SCLK, LCD_MOSI];

/// Every GPIO the board claims, backlight first.
pub const ALL_PINS: [u8; 6] = [LCD_BL, LCD_DC, LCD_RST, LCD_CS, LCD_SCLK, LCD_MOSI];
