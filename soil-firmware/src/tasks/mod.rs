// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren nur über SensorCell (Rohwert) und PlantSelection (Profil).

use soil_core::StopSignal;

pub mod actuator;
pub mod command;
pub mod display;
pub mod mqtt;
pub mod sensor;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use actuator::actuator_task;
pub use command::command_task;
pub use display::display_task;
pub use mqtt::{mqtt_task, plant_type_task};
pub use sensor::sensor_task;
pub use wifi::{connection_task, dhcp_task, net_task};

/// Stop-Signal der Geräte-Tasks - wird nie gesetzt
pub(crate) static RUN_FOREVER: StopSignal = StopSignal::new();
