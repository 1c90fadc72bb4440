// Library-Root: Hardware-Anbindung und Embassy Tasks
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von soil-core
// Die Tasks importieren alles über crate::, damit die Logik-Schicht austauschbar bleibt
pub use soil_core::{
    Actuator, CalibrationBounds, CommandChannel, MoistureSensor, PlantSelection, ProfileSource,
    SensorCell, SerialPort, StopSignal, TelemetryRecord, TextDisplay, actuate_once, lookup,
    parse_plant_type, render_once, run_periodic, sample_once,
};
