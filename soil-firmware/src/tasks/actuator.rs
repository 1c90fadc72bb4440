// LED Task - Schaltet die Warn-LED wenn der Boden zu trocken ist
use defmt::{info, warn};
use embassy_time::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::config::ACTUATOR_PERIOD_MS;
use crate::hal::LedOutput;
use crate::tasks::RUN_FOREVER;
use crate::{Actuator, PlantSelection, ProfileSource, SensorCell, StopSignal, actuate_once, run_periodic};

/// LED Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Schreibt alle 100 ms den Pegel neu (kein Merken des Zustands,
/// ein verpasster Zyklus korrigiert sich im nächsten).
///
/// # Parameter
/// - `led`: Warn-LED (Hardware oder Mock)
/// - `cell`: Shared State mit dem letzten Rohwert
/// - `profiles`: Quelle für das aktive Pflanzen-Profil
/// - `stop`: Stop-Signal (auf dem Gerät nie gesetzt)
pub async fn actuator_logic<A, P>(mut led: A, cell: &SensorCell, profiles: &P, stop: &StopSignal)
where
    A: Actuator,
    P: ProfileSource,
{
    // Nur für das Log: Pegelwechsel melden statt alle 100 ms
    let mut logged_level: Option<bool> = None;

    run_periodic(stop, &mut Delay, ACTUATOR_PERIOD_MS, || {
        match actuate_once(&mut led, cell, profiles) {
            Ok(active) if logged_level != Some(active) => {
                info!("LED: {}", if active { "An (Boden trocken)" } else { "Aus" });
                logged_level = Some(active);
            }
            Ok(_) => {}
            Err(e) => warn!("LED: Write failed: {}", e),
        }
    })
    .await;
}

/// LED Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `gpio2`: GPIO für die Warn-LED
/// - `cell`: Shared State mit dem letzten Rohwert
/// - `selection`: Aktuelle Pflanzen-Auswahl
#[embassy_executor::task]
pub async fn actuator_task(
    gpio2: esp_hal::peripherals::GPIO2<'static>,
    cell: &'static SensorCell,
    selection: &'static PlantSelection,
) {
    let pin = Output::new(gpio2, Level::Low, OutputConfig::default());
    let led = LedOutput::new(pin);

    actuator_logic(led, cell, selection, &RUN_FOREVER).await;
}
