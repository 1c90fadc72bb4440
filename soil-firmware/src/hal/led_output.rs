// Warn-LED an einem GPIO-Ausgang

use esp_hal::gpio::{Level, Output};
use soil_core::{Actuator, PortError};

/// Real Hardware LED
///
/// High = LED an = Boden zu trocken.
pub struct LedOutput<'d> {
    pin: Output<'d>,
}

impl<'d> LedOutput<'d> {
    /// Übernimmt einen bereits konfigurierten Ausgang (Startpegel Low)
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl Actuator for LedOutput<'_> {
    fn set_active(&mut self, active: bool) -> Result<(), PortError> {
        // GPIO-Schreiben kann auf dem ESP32-C6 nicht fehlschlagen
        self.pin.set_level(Level::from(active));
        Ok(())
    }
}
