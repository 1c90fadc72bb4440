// Bodenfeuchte-Sensor über den internen ADC
//
// Kapazitiver Sensor v1.2 an GPIO4 (ADC1), 11 dB Dämpfung
// für den vollen Spannungsbereich bis ~3.1 V.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO4};
use soil_core::{MoistureSensor, PortError};

/// Real Hardware Sensor
///
/// Liefert 12-Bit Rohwerte (0..=4095).
pub struct AdcMoistureSensor<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO4<'d>, ADC1<'d>>,
}

impl<'d> AdcMoistureSensor<'d> {
    /// Erstellt einen neuen AdcMoistureSensor
    ///
    /// # Parameter
    /// - `adc1`: ADC1 Peripheral
    /// - `gpio4`: Analog-Eingang des Sensors
    pub fn new(adc1: ADC1<'d>, gpio4: GPIO4<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(gpio4, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);

        Self { adc, pin }
    }
}

impl MoistureSensor for AdcMoistureSensor<'_> {
    fn read_raw(&mut self) -> Result<u16, PortError> {
        // read_oneshot startet die Wandlung und liefert WouldBlock bis sie fertig ist
        nb::block!(self.adc.read_oneshot(&mut self.pin)).map_err(|_| PortError::ReadFailed)
    }
}
