//! Lumy bring-up firmware.
//!
//! Prints the boot banner, lights the backlight, then blinks it once a
//! second while reporting a running counter.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{
    Delay,
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::{
    gpio::Output,
    interrupt::software::SoftwareInterruptControl,
    timer::timg::TimerGroup,
};
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use lumy::*;

esp_bootloader_esp_idf::esp_app_desc!();

/// Time for the host's serial monitor to attach before the banner.
const SERIAL_SETTLE: Duration = Duration::from_secs(1);

type BoardHeartbeat = Heartbeat<Output<'static>, Delay>;

#[embassy_executor::task]
async fn heartbeat_task(heartbeat: &'static mut BoardHeartbeat) {
    info!(
        "Heartbeat task started: {} ms on, {} ms off",
        heartbeat.timing().on_ms,
        heartbeat.timing().off_ms
    );

    loop {
        let Ok(count) = heartbeat.beat().await;
        info!("Running... {} seconds", count);
    }
}

fn print_banner() {
    for line in banner::HEADER {
        info!("{=str}", line);
    }
    info!(
        "Panel: ST7789 {}x{} on DC={} RST={} CS={} SCLK={} MOSI={}",
        pins::LCD_WIDTH,
        pins::LCD_HEIGHT,
        pins::LCD_DC,
        pins::LCD_RST,
        pins::LCD_CS,
        pins::LCD_SCLK,
        pins::LCD_MOSI
    );
}

fn print_next_steps() {
    info!("");
    info!("{=str}", banner::WELCOME);
    info!("");
    info!("Next steps:");
    for (i, step) in banner::NEXT_STEPS.into_iter().enumerate() {
        info!("{}. {=str}", i + 1, step);
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = lumy::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 32 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);

    Timer::after(SERIAL_SETTLE).await;
    print_banner();

    let backlight: BoardBacklight = resources.backlight.into();
    info!("{=str} on GPIO{}", banner::READY, pins::LCD_BL);
    print_next_steps();

    let heartbeat = mk_static!(
        BoardHeartbeat,
        Heartbeat::new(backlight, Delay, BlinkTiming::DEFAULT)
    );
    spawner.must_spawn(heartbeat_task(heartbeat));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
