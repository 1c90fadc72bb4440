//! Soil Core - Platform-agnostic Logic, Shared State and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Hardware-Ports als Traits, den Shared State zwischen
//! den Tasks und die testbare Logik jedes Tasks.

#![no_std]

pub mod command;
pub mod logic;
pub mod profiles;
pub mod runner;
pub mod state;
pub mod tasks;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use command::{Command, CommandChannel, COMMAND_BUFFER_CAPACITY};
pub use logic::{ADC_MAX, moisture_percent, needs_water};
pub use profiles::{
    DEFAULT_PLANT_TYPE, FIXED_PROFILE, PLANT_PROFILES, PlantSelection, ProfileSource, lookup,
    parse_plant_type,
};
pub use runner::{StopSignal, run_periodic};
pub use state::SensorCell;
pub use tasks::{StatusView, actuate_once, render_once, sample_once};
pub use traits::{Actuator, MoistureSensor, PortError, SerialPort, TextDisplay};
pub use types::{CalibrationBounds, PlantProfile, TelemetryRecord};
