//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** ESP32-C6 Adapter in `soil-firmware/src/hal`
//! - **Testing:** Mock-Ports in `soil-tests`

/// Fehler-Typ für alle Hardware-Ports
///
/// Kein Fehler ist fatal: der Task loggt ihn und versucht es im nächsten
/// Zyklus erneut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError {
    ReadFailed,
    WriteFailed,
}

/// Bodenfeuchte-Sensor (ADC)
pub trait MoistureSensor: Send {
    /// Liest einen Rohwert (0..=4095 bei 12-Bit ADC)
    fn read_raw(&mut self) -> Result<u16, PortError>;
}

/// Zweizeiliges Text-Display (LCD 16x2)
pub trait TextDisplay: Send {
    /// Löscht den gesamten Display-Inhalt
    fn clear(&mut self) -> Result<(), PortError>;

    /// Schreibt Text ab Spalte `col` in Zeile `row`
    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), PortError>;
}

/// Binärer Ausgang (Warn-LED)
pub trait Actuator: Send {
    fn set_active(&mut self, active: bool) -> Result<(), PortError>;
}

/// Byte-orientierte serielle Schnittstelle
pub trait SerialPort: Send {
    /// Non-blocking: `Ok(None)` wenn kein Byte anliegt
    fn read_byte(&mut self) -> Result<Option<u8>, PortError>;

    /// Schreibt alle Bytes (blockiert höchstens bis der TX-FIFO frei ist)
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PortError>;
}
