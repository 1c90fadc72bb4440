// Display Task - Zeigt Pflanze und Bodenfeuchte auf dem LCD
use defmt::{Debug2Format, debug, error, info, warn};
use embassy_time::{Delay, Duration, Timer};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;

use crate::config::{CALIBRATION, DISPLAY_REFRESH_PERIOD_MS, I2C_FREQUENCY_KHZ, LCD_I2C_ADDRESS};
use crate::hal::Lcd1602;
use crate::tasks::RUN_FOREVER;
use crate::{PlantSelection, ProfileSource, SensorCell, StopSignal, TextDisplay, render_once, run_periodic};

/// Wartezeit zwischen zwei Init-Versuchen des LCD
const LCD_INIT_RETRY_SECS: u64 = 5;

/// Display Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Liest alle 2 s den Rohwert, rechnet ihn in Prozent um und schreibt
/// zwei Zeilen: Pflanzenname und Feuchte (oder "UMIDADE BAIXA!").
///
/// # Parameter
/// - `display`: LCD (Hardware oder Mock), bereits initialisiert
/// - `cell`: Shared State mit dem letzten Rohwert
/// - `profiles`: Quelle für das aktive Pflanzen-Profil
/// - `stop`: Stop-Signal (auf dem Gerät nie gesetzt)
pub async fn display_logic<D, P>(mut display: D, cell: &SensorCell, profiles: &P, stop: &StopSignal)
where
    D: TextDisplay,
    P: ProfileSource,
{
    run_periodic(stop, &mut Delay, DISPLAY_REFRESH_PERIOD_MS, || {
        match render_once(&mut display, cell, profiles, CALIBRATION) {
            Ok(view) => debug!("Display: '{}' / '{}'", view.top.as_str(), view.bottom.as_str()),
            Err(e) => warn!("Display: Write failed: {}", e),
        }
    })
    .await;
}

/// Display Task - Embassy Task für parallele Ausführung
///
/// Initialisiert I2C und LCD (mit Wiederholung bis das LCD antwortet)
/// und ruft dann `display_logic()` auf.
///
/// # Parameter
/// - `i2c0`: I2C0 Peripheral
/// - `sda` / `scl`: I2C-Pins zum PCF8574 Backpack
/// - `cell`: Shared State mit dem letzten Rohwert
/// - `selection`: Aktuelle Pflanzen-Auswahl
#[embassy_executor::task]
pub async fn display_task(
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO21<'static>,
    scl: esp_hal::peripherals::GPIO22<'static>,
    cell: &'static SensorCell,
    selection: &'static PlantSelection,
) {
    let config = I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ));
    let mut i2c = match I2c::new(i2c0, config) {
        Ok(i2c) => i2c.with_sda(sda).with_scl(scl),
        Err(e) => {
            error!("Display: Invalid I2C configuration: {}", Debug2Format(&e));
            return;
        }
    };
    let mut lcd_delay = esp_hal::delay::Delay::new();

    let lcd = loop {
        match Lcd1602::init(&mut i2c, &mut lcd_delay, LCD_I2C_ADDRESS) {
            Ok(lcd) => break lcd,
            Err(e) => {
                error!(
                    "Display: LCD init failed: {}, retrying in {}s...",
                    e, LCD_INIT_RETRY_SECS
                );
                Timer::after(Duration::from_secs(LCD_INIT_RETRY_SECS)).await;
            }
        }
    };
    info!("Display: LCD ready at {:#x}", LCD_I2C_ADDRESS);

    display_logic(lcd, cell, selection, &RUN_FOREVER).await;
}
