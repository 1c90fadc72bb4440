//! Mock-Ports für Host-Tests
//!
//! In-memory Implementierungen der Hardware-Traits aus `soil-core`.
//! Nutzen `std` (VecDeque, Vec, String), da die Tests auf dem Host laufen.

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal_async::delay::DelayNs;
use soil_core::{Actuator, MoistureSensor, PortError, SerialPort, StopSignal, TextDisplay};

// ============================================================================
// Mock Sensor
// ============================================================================

/// Liefert vorgegebene Messwerte der Reihe nach
///
/// Ist die Liste leer, schlägt das Lesen fehl.
#[derive(Default)]
pub struct MockSensor {
    pub readings: VecDeque<Result<u16, PortError>>,
    pub read_count: usize,
}

impl MockSensor {
    pub fn with_readings(readings: &[u16]) -> Self {
        Self {
            readings: readings.iter().copied().map(Ok).collect(),
            read_count: 0,
        }
    }
}

impl MoistureSensor for MockSensor {
    fn read_raw(&mut self) -> Result<u16, PortError> {
        self.read_count += 1;
        self.readings.pop_front().unwrap_or(Err(PortError::ReadFailed))
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Speichert den Display-Inhalt zeilenweise
#[derive(Default)]
pub struct MockDisplay {
    pub lines: [String; 2],
    pub clear_count: usize,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextDisplay for MockDisplay {
    fn clear(&mut self) -> Result<(), PortError> {
        self.lines = Default::default();
        self.clear_count += 1;
        Ok(())
    }

    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), PortError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(PortError::WriteFailed);
        }

        let line = &mut self.lines[usize::from(row)];
        while line.len() < usize::from(col) {
            line.push(' ');
        }
        line.truncate(usize::from(col));
        line.push_str(text);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Actuator
// ============================================================================

/// Merkt sich jeden geschriebenen Pegel
#[derive(Default)]
pub struct MockActuator {
    pub history: Vec<bool>,
    pub fail_next_write: bool,
}

impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<bool> {
        self.history.last().copied()
    }
}

impl Actuator for MockActuator {
    fn set_active(&mut self, active: bool) -> Result<(), PortError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(PortError::WriteFailed);
        }

        self.history.push(active);
        Ok(())
    }
}

// ============================================================================
// Mock Serial
// ============================================================================

/// Eingabe-Queue und Ausgabe-Puffer
#[derive(Default)]
pub struct MockSerial {
    pub input: VecDeque<u8>,
    pub output: Vec<u8>,
    pub fail_next_write: bool,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simuliert eingehende Bytes
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    pub fn output_str(&self) -> &str {
        std::str::from_utf8(&self.output).expect("output is valid UTF-8")
    }
}

impl SerialPort for MockSerial {
    fn read_byte(&mut self) -> Result<Option<u8>, PortError> {
        Ok(self.input.pop_front())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PortError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(PortError::WriteFailed);
        }

        self.output.extend_from_slice(bytes);
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay ohne Wartezeit, setzt das Stop-Signal nach `stop_after` Aufrufen
pub struct MockDelay<'a> {
    stop: &'a StopSignal,
    stop_after: u32,
    pub calls: u32,
    pub total_ms: u64,
}

impl<'a> MockDelay<'a> {
    pub fn new(stop: &'a StopSignal, stop_after: u32) -> Self {
        Self {
            stop,
            stop_after,
            calls: 0,
            total_ms: 0,
        }
    }

    fn record(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += u64::from(ms);
        if self.calls >= self.stop_after {
            self.stop.stop();
        }
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}
