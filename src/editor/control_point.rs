//! Kontrollpunkte und Zubehör einer Edit-Session.

use crate::core::{
    AltitudeMode, Color, Location, Placemark, PlacemarkAttributes, Polyline, Position,
};

/// Zweck eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPurpose {
    /// Einzelner Boundary-Vertex
    Location,
    /// Rotation der gesamten Form
    Rotation,
    /// Breite (Hauptachse)
    Width,
    /// Höhe (Nebenachse)
    Height,
    /// Kreisradius
    Radius,
    /// Verschieben der gesamten Form
    Drag,
}

/// Punkt-Marker mit Editier-Zweck.
///
/// `index` ist genau dann gesetzt, wenn `purpose == Location`
/// (flacher Vertex-Index in die Boundary).
#[derive(Debug, Clone)]
pub struct ControlPoint {
    pub placemark: Placemark,
    pub purpose: ControlPurpose,
    pub index: Option<usize>,
}

impl ControlPoint {
    /// Kontrollpunkt für einen Boundary-Vertex.
    pub fn for_vertex(index: usize, attributes: PlacemarkAttributes) -> Self {
        Self {
            placemark: unpositioned_marker(attributes),
            purpose: ControlPurpose::Location,
            index: Some(index),
        }
    }

    /// Kontrollpunkt für eine Form-weite Operation (Rotation, Resize, Drag).
    pub fn for_shape(purpose: ControlPurpose, attributes: PlacemarkAttributes) -> Self {
        debug_assert!(purpose != ControlPurpose::Location);
        Self {
            placemark: unpositioned_marker(attributes),
            purpose,
            index: None,
        }
    }

    /// Aktuelle Marker-Position.
    pub fn position(&self) -> Position {
        self.placemark.position
    }

    /// Setzt den Marker auf die Oberflächen-Location und macht ihn sichtbar.
    pub fn set_location(&mut self, location: Location) {
        self.placemark.position = Position::from_location(location, 0.0);
        self.placemark.visible = true;
    }
}

/// Bodengeklemmter Marker am Ursprung, unsichtbar bis zur Positionierung.
fn unpositioned_marker(attributes: PlacemarkAttributes) -> Placemark {
    Placemark {
        position: Position::default(),
        attributes,
        altitude_mode: AltitudeMode::ClampToGround,
        visible: false,
    }
}

/// Dekoratives Renderable einer Edit-Session (z.B. die Rotations-Linie).
#[derive(Debug, Clone)]
pub struct Accessory {
    pub line: Polyline,
}

/// Marker-Attribute für die drei Handle-Klassen einer Session.
#[derive(Debug, Clone, Copy)]
pub struct ControlAttributes {
    /// Resize-Handles (Breite/Höhe/Radius)
    pub resize: PlacemarkAttributes,
    /// Rotations-Handle
    pub rotate: PlacemarkAttributes,
    /// Vertex- und Drag-Handles
    pub location: PlacemarkAttributes,
}

impl Default for ControlAttributes {
    fn default() -> Self {
        Self {
            resize: PlacemarkAttributes {
                color: Color::CYAN,
                ..PlacemarkAttributes::default()
            },
            rotate: PlacemarkAttributes {
                color: Color::GREEN,
                ..PlacemarkAttributes::default()
            },
            location: PlacemarkAttributes {
                color: Color::GOLD,
                ..PlacemarkAttributes::default()
            },
        }
    }
}
