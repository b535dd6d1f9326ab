//! Static catalog of the colors the app teaches.

use bevy::prelude::*;

/// One teachable color: localized + English names plus its media assets.
/// Records are compiled in and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRecord {
    /// Unique, stable identifier (used for detail navigation).
    pub id: u32,
    /// Spanish display name.
    pub name: &'static str,
    /// English name taught by the app; key into the swatch & combination tables.
    pub english: &'static str,
    /// Card illustration, relative to the asset root.
    pub image: &'static str,
    /// Pronunciation clip, relative to the asset root.
    pub audio: &'static str,
    pub description: Option<&'static str>,
}

const COLORS: [ColorRecord; 7] = [
    ColorRecord {
        id: 1,
        name: "Rojo",
        english: "Red",
        image: "images/red.png",
        audio: "audio/red.ogg",
        description: Some("El rojo es un color apasionado y vibrante."),
    },
    ColorRecord {
        id: 2,
        name: "Verde",
        english: "Green",
        image: "images/green.png",
        audio: "audio/green.ogg",
        description: Some("El verde representa la naturaleza y la tranquilidad."),
    },
    ColorRecord {
        id: 3,
        name: "Azul",
        english: "Blue",
        image: "images/blue.png",
        audio: "audio/blue.ogg",
        description: Some("El azul es un color calmante y refrescante."),
    },
    ColorRecord {
        id: 4,
        name: "Amarillo",
        english: "Yellow",
        image: "images/yellow.png",
        audio: "audio/yellow.ogg",
        description: Some("El amarillo brilla como el sol."),
    },
    ColorRecord {
        id: 5,
        name: "Naranja",
        english: "Orange",
        image: "images/orange.png",
        audio: "audio/orange.ogg",
        description: None,
    },
    ColorRecord {
        id: 6,
        name: "Negro",
        english: "Black",
        image: "images/black.png",
        audio: "audio/black.ogg",
        description: None,
    },
    ColorRecord {
        id: 7,
        name: "Blanco",
        english: "White",
        image: "images/white.png",
        audio: "audio/white.ogg",
        description: None,
    },
];

/// Seed list backing the registry. Stable order, unique ids.
pub fn seed_records() -> &'static [ColorRecord] {
    &COLORS
}

/// Read-only access to the seeded color list.
#[derive(Resource, Debug)]
pub struct ColorRegistry {
    records: &'static [ColorRecord],
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self { records: &COLORS }
    }
}

impl ColorRegistry {
    pub fn all(&self) -> &'static [ColorRecord] {
        self.records
    }

    /// `None` is a valid miss, not an error; callers decide how to degrade.
    pub fn find_by_id(&self, id: u32) -> Option<&'static ColorRecord> {
        self.records.iter().find(|c| c.id == id)
    }
}
