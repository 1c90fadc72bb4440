//! Task Logic - ein Zyklus pro Task, ohne Hardware-Abhängigkeit
//!
//! Die Firmware-Tasks rufen diese Funktionen über [`crate::run_periodic`]
//! mit ihrer Periode auf und loggen die Ergebnisse.

use core::fmt::Write as _;

use heapless::String;

use crate::logic::clamp_reading;
use crate::profiles::ProfileSource;
use crate::state::SensorCell;
use crate::traits::{Actuator, MoistureSensor, PortError, TextDisplay};
use crate::types::{CalibrationBounds, PlantProfile};

/// Spalten des LCD
pub const DISPLAY_COLUMNS: usize = 16;

/// Breite des Pflanzennamens in der ersten Zeile
const NAME_WIDTH: usize = 10;

/// Warnung in der zweiten Zeile wenn der Boden zu trocken ist
pub const LOW_MOISTURE_ALERT: &str = "UMIDADE BAIXA!";

// ============================================================================
// Sensor Sampling
// ============================================================================

/// Liest einen Sensorwert und veröffentlicht ihn
///
/// Werte außerhalb des ADC-Bereichs werden begrenzt. Bei einem Lesefehler
/// bleibt der vorherige Wert in der Zelle stehen.
pub fn sample_once<S: MoistureSensor>(sensor: &mut S, cell: &SensorCell) -> Result<u16, PortError> {
    let raw = clamp_reading(sensor.read_raw()?);
    cell.publish(raw);
    Ok(raw)
}

// ============================================================================
// Display
// ============================================================================

/// Zweizeilige Status-Ansicht für das LCD
///
/// Zeile 0: Pflanzenname, Zeile 1: Feuchte in Prozent oder Warnung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub top: String<DISPLAY_COLUMNS>,
    pub bottom: String<DISPLAY_COLUMNS>,
    pub needs_water: bool,
}

impl StatusView {
    /// Baut die Ansicht aus Rohwert, Profil und Kalibrierung
    ///
    /// Die Warnung hängt am Rohwert (Vergleich mit der Profil-Schwelle),
    /// nicht am Prozentwert.
    pub fn compose(raw: u16, profile: PlantProfile, calibration: CalibrationBounds) -> Self {
        let needs_water = profile.is_dry(raw);

        let top = name_line(profile.name);

        let mut bottom = String::new();
        if needs_water {
            let _ = bottom.push_str(LOW_MOISTURE_ALERT);
        } else {
            let _ = write!(bottom, "Umidade: {:>3}%", calibration.percent(raw));
        }

        Self {
            top,
            bottom,
            needs_water,
        }
    }
}

/// Pflanzenname linksbündig, auf `NAME_WIDTH` Zeichen aufgefüllt
///
/// Gekürzt wird zeichenweise, bis die 16 Byte des Puffers voll sind.
/// Umlaute belegen zwei Byte, deshalb passen davon weniger in die Zeile.
fn name_line(name: &str) -> String<DISPLAY_COLUMNS> {
    let mut line = String::new();
    let mut columns = 0;

    for ch in name.chars().take(DISPLAY_COLUMNS) {
        if line.push(ch).is_err() {
            break;
        }
        columns += 1;
    }

    while columns < NAME_WIDTH && line.push(' ').is_ok() {
        columns += 1;
    }

    line
}

/// Aktualisiert das Display mit dem aktuellen Sensorwert
pub fn render_once<D, P>(
    display: &mut D,
    cell: &SensorCell,
    profiles: &P,
    calibration: CalibrationBounds,
) -> Result<StatusView, PortError>
where
    D: TextDisplay,
    P: ProfileSource + ?Sized,
{
    let view = StatusView::compose(cell.read(), profiles.active_profile(), calibration);

    display.clear()?;
    display.write_at(0, 0, &view.top)?;
    display.write_at(0, 1, &view.bottom)?;

    Ok(view)
}

// ============================================================================
// Actuator
// ============================================================================

/// Setzt die Warn-LED nach dem aktuellen Sensorwert
///
/// Zustandslos: jeder Zyklus schreibt den Pegel neu, unabhängig vom
/// vorherigen Zyklus.
///
/// # Rückgabe
/// Der geschriebene Pegel (`true` = LED an)
pub fn actuate_once<A, P>(actuator: &mut A, cell: &SensorCell, profiles: &P) -> Result<bool, PortError>
where
    A: Actuator,
    P: ProfileSource + ?Sized,
{
    let active = profiles.active_profile().is_dry(cell.read());
    actuator.set_active(active)?;
    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::PLANT_PROFILES;

    #[test]
    fn test_status_view_shows_percent() {
        let view = StatusView::compose(3000, PLANT_PROFILES[0], CalibrationBounds::default());
        assert_eq!(view.top.as_str(), "Samambaia ");
        assert_eq!(view.bottom.as_str(), "Umidade:  47%");
        assert!(!view.needs_water);
    }

    #[test]
    fn test_status_view_shows_alert_above_threshold() {
        let view = StatusView::compose(3700, PLANT_PROFILES[0], CalibrationBounds::default());
        assert_eq!(view.bottom.as_str(), LOW_MOISTURE_ALERT);
        assert!(view.needs_water);
    }

    #[test]
    fn test_status_view_full_percent() {
        let view = StatusView::compose(1000, PLANT_PROFILES[1], CalibrationBounds::default());
        assert_eq!(view.top.as_str(), "Bananeira ");
        assert_eq!(view.bottom.as_str(), "Umidade: 100%");
    }

    #[test]
    fn test_status_view_truncates_long_name() {
        let profile = PlantProfile::new("Espada-de-Sao-Jorge", 3000);
        let view = StatusView::compose(2000, profile, CalibrationBounds::default());
        assert_eq!(view.top.as_str(), "Espada-de-Sao-Jo");
    }

    #[test]
    fn test_status_view_truncates_multibyte_name_on_char_boundary() {
        let profile = PlantProfile::new("Espada-São-Jorge!", 3500);
        let view = StatusView::compose(2000, profile, CalibrationBounds::default());
        assert_eq!(view.top.as_str(), "Espada-São-Jorg");
        assert!(view.top.len() <= DISPLAY_COLUMNS);
    }

    #[test]
    fn test_status_view_pads_short_multibyte_name() {
        let profile = PlantProfile::new("Açaí", 3500);
        let view = StatusView::compose(2000, profile, CalibrationBounds::default());
        assert_eq!(view.top.as_str(), "Açaí      ");
    }
}
