//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

/// Größter Rohwert des 12-Bit ADC
pub const ADC_MAX: u16 = 4095;

/// Rechnet einen Rohwert in Bodenfeuchte (0..=100 %) um
///
/// Lineare Interpolation zwischen `(dry, 0)` und `(wet, 100)` mit
/// Ganzzahl-Division (Rundung Richtung 0), danach auf 0..=100 begrenzt.
/// Funktioniert auch für `dry > wet`. Bei `dry == wet` ist keine Steigung
/// definiert, dann ist das Ergebnis 0.
///
/// # Beispiele
///
/// ```
/// # use soil_core::moisture_percent;
/// assert_eq!(moisture_percent(4095, 4095, 1800), 0);
/// assert_eq!(moisture_percent(1800, 4095, 1800), 100);
/// assert_eq!(moisture_percent(3000, 4095, 1800), 47);
/// assert_eq!(moisture_percent(500, 4095, 1800), 100); // nasser als kalibriert
/// ```
pub fn moisture_percent(raw: u16, dry: u16, wet: u16) -> u8 {
    if dry == wet {
        return 0;
    }

    let span = i32::from(wet) - i32::from(dry);
    let scaled = (i32::from(raw) - i32::from(dry)) * 100 / span;
    scaled.clamp(0, 100) as u8
}

/// `true` wenn der Rohwert über der Schwelle liegt (Boden zu trocken)
///
/// Verglichen wird der Rohwert, nicht der Prozentwert.
pub fn needs_water(raw: u16, threshold: u16) -> bool {
    raw > threshold
}

/// Begrenzt einen Sensorwert auf den ADC-Bereich
pub fn clamp_reading(raw: u16) -> u16 {
    raw.min(ADC_MAX)
}
