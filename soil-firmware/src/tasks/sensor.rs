// Sensor Task - Liest den Bodenfeuchte-Sensor und veröffentlicht den Rohwert
use defmt::{debug, info, warn};
use embassy_time::Delay;

use crate::config::SENSOR_SAMPLE_PERIOD_MS;
use crate::hal::AdcMoistureSensor;
use crate::tasks::RUN_FOREVER;
use crate::{MoistureSensor, SensorCell, StopSignal, run_periodic, sample_once};

/// Sensor Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Liest jede Sekunde einen Rohwert und schreibt ihn in die SensorCell.
/// Bei einem Lesefehler bleibt der letzte Wert stehen.
///
/// # Parameter
/// - `sensor`: Sensor (Hardware oder Mock)
/// - `cell`: Shared State für den Rohwert (einziger Schreiber)
/// - `stop`: Stop-Signal (auf dem Gerät nie gesetzt)
pub async fn sensor_logic<S: MoistureSensor>(mut sensor: S, cell: &SensorCell, stop: &StopSignal) {
    info!("Sensor: Sampling every {} ms", SENSOR_SAMPLE_PERIOD_MS);

    run_periodic(stop, &mut Delay, SENSOR_SAMPLE_PERIOD_MS, || {
        match sample_once(&mut sensor, cell) {
            Ok(raw) => debug!("Sensor: raw={}", raw),
            Err(e) => warn!("Sensor: Read failed: {}", e),
        }
    })
    .await;
}

/// Sensor Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `adc1`: ADC1 Peripheral
/// - `gpio4`: Analog-Eingang des Sensors
/// - `cell`: Shared State für den Rohwert
#[embassy_executor::task]
pub async fn sensor_task(
    adc1: esp_hal::peripherals::ADC1<'static>,
    gpio4: esp_hal::peripherals::GPIO4<'static>,
    cell: &'static SensorCell,
) {
    let sensor = AdcMoistureSensor::new(adc1, gpio4);
    sensor_logic(sensor, cell, &RUN_FOREVER).await;
}
