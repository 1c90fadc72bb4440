//! Plant Profile Registry
//!
//! Feste Tabelle der unterstützten Pflanzen und die aktuell gewählte
//! Pflanze als atomarer Shared State.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::types::PlantProfile;

/// Profil-Tabelle, Index = Pflanzen-Typ - 1
///
/// Schwellen in ADC-Einheiten: je höher, desto trockener darf der Boden werden.
pub const PLANT_PROFILES: [PlantProfile; 3] = [
    PlantProfile::new("Samambaia", 3600), // Typ 1: viel Wasser
    PlantProfile::new("Bananeira", 3000), // Typ 2: mittel
    PlantProfile::new("Cacto", 4200),     // Typ 3: wenig Wasser
];

/// Pflanzen-Typ nach dem Start
pub const DEFAULT_PLANT_TYPE: u8 = 1;

/// Einzelnes Profil für Aufbauten ohne Pflanzen-Auswahl
pub const FIXED_PROFILE: PlantProfile = PlantProfile::new("Hidratacao", 3500);

/// `true` wenn `plant_type` ein gültiger 1-basierter Tabellen-Index ist
fn is_valid(plant_type: i32) -> bool {
    plant_type >= 1 && plant_type as usize <= PLANT_PROFILES.len()
}

/// Liefert das Profil zu einem 1-basierten Pflanzen-Typ
///
/// Ungültige Typen (0, negativ, zu groß) liefern das erste Profil.
///
/// ```
/// # use soil_core::{lookup, PLANT_PROFILES};
/// assert_eq!(lookup(2).name, "Bananeira");
/// assert_eq!(lookup(0), PLANT_PROFILES[0]);
/// assert_eq!(lookup(99), PLANT_PROFILES[0]);
/// ```
pub fn lookup(plant_type: i32) -> PlantProfile {
    if is_valid(plant_type) {
        PLANT_PROFILES[plant_type as usize - 1]
    } else {
        PLANT_PROFILES[0]
    }
}

/// Parst eine Pflanzen-Typ-Nachricht (ASCII-Dezimalzahl, z.B. MQTT-Payload)
///
/// Whitespace am Rand wird ignoriert. Der Bereich wird hier NICHT geprüft,
/// das macht [`PlantSelection::select`].
pub fn parse_plant_type(payload: &[u8]) -> Option<i32> {
    core::str::from_utf8(payload).ok()?.trim().parse().ok()
}

/// Quelle für das aktive Pflanzen-Profil
///
/// Display- und LED-Task fragen jeden Zyklus neu ab.
pub trait ProfileSource {
    fn active_profile(&self) -> PlantProfile;
}

/// Aufbau ohne Auswahl: das Profil selbst ist immer aktiv
impl ProfileSource for PlantProfile {
    fn active_profile(&self) -> PlantProfile {
        *self
    }
}

/// Aktuell gewählter Pflanzen-Typ
///
/// Geschrieben von außen (MQTT), gelesen von Display-, LED- und
/// MQTT-Task. Enthält immer einen gültigen Typ.
#[derive(Debug)]
pub struct PlantSelection {
    plant_type: AtomicU8,
}

impl PlantSelection {
    pub const fn new() -> Self {
        Self {
            plant_type: AtomicU8::new(DEFAULT_PLANT_TYPE),
        }
    }

    /// Wählt einen neuen Pflanzen-Typ
    ///
    /// Ungültige Typen werden stillschweigend ignoriert, die letzte gültige
    /// Auswahl bleibt bestehen.
    pub fn select(&self, plant_type: i32) {
        if is_valid(plant_type) {
            self.plant_type.store(plant_type as u8, Ordering::Relaxed);
        }
    }

    /// Übernimmt eine Pflanzen-Typ-Nachricht (z.B. MQTT-Payload)
    ///
    /// # Rückgabe
    /// Das neue aktive Profil, oder `None` wenn die Nachricht keine Zahl
    /// oder kein gültiger Typ war (Auswahl unverändert)
    pub fn apply_message(&self, payload: &[u8]) -> Option<PlantProfile> {
        let plant_type = parse_plant_type(payload).filter(|&t| is_valid(t))?;
        self.select(plant_type);
        Some(lookup(plant_type))
    }

    /// Aktueller Pflanzen-Typ (1-basiert)
    pub fn current_type(&self) -> u8 {
        self.plant_type.load(Ordering::Relaxed)
    }

    /// Profil zum aktuellen Pflanzen-Typ
    pub fn current(&self) -> PlantProfile {
        lookup(i32::from(self.current_type()))
    }
}

impl Default for PlantSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSource for PlantSelection {
    fn active_profile(&self) -> PlantProfile {
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_valid_range() {
        for (index, profile) in PLANT_PROFILES.iter().enumerate() {
            assert_eq!(lookup(index as i32 + 1), *profile);
        }
    }

    #[test]
    fn test_lookup_falls_back_to_first() {
        assert_eq!(lookup(0), PLANT_PROFILES[0]);
        assert_eq!(lookup(-1), PLANT_PROFILES[0]);
        assert_eq!(lookup(4), PLANT_PROFILES[0]);
        assert_eq!(lookup(i32::MIN), PLANT_PROFILES[0]);
        assert_eq!(lookup(i32::MAX), PLANT_PROFILES[0]);
    }

    #[test]
    fn test_selection_default() {
        let selection = PlantSelection::new();
        assert_eq!(selection.current_type(), DEFAULT_PLANT_TYPE);
        assert_eq!(selection.current().name, "Samambaia");
    }

    #[test]
    fn test_selection_ignores_invalid() {
        let selection = PlantSelection::new();
        selection.select(3);
        selection.select(0);
        selection.select(-5);
        selection.select(256 + 2);
        assert_eq!(selection.current_type(), 3);
        assert_eq!(selection.current().name, "Cacto");
    }

    #[test]
    fn test_apply_message() {
        let selection = PlantSelection::new();
        assert_eq!(selection.apply_message(b"2\n").map(|p| p.name), Some("Bananeira"));
        assert_eq!(selection.apply_message(b"7"), None);
        assert_eq!(selection.apply_message(b"Cacto"), None);
        assert_eq!(selection.current_type(), 2);
    }

    #[test]
    fn test_parse_plant_type() {
        assert_eq!(parse_plant_type(b"2"), Some(2));
        assert_eq!(parse_plant_type(b" 3\r\n"), Some(3));
        assert_eq!(parse_plant_type(b"-1"), Some(-1));
        assert_eq!(parse_plant_type(b""), None);
        assert_eq!(parse_plant_type(b"zwei"), None);
        assert_eq!(parse_plant_type(&[0xff, 0x31]), None);
    }
}
