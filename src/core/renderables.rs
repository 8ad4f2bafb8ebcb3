//! Render-Primitive, die der Editor besitzt und eine Render-Schicht zeichnet.
//!
//! Reine Daten ohne Zeichenlogik. Kontrollpunkte und Zubehör einer
//! Edit-Session bestehen aus diesen Primitiven; das Rendering selbst liegt
//! außerhalb dieser Library.

use super::{PlacemarkAttributes, Position, ShapeAttributes};
use serde::{Deserialize, Serialize};

/// Höhen-Interpretation eines Renderables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AltitudeMode {
    /// Auf die Gelände-Oberfläche geklemmt
    #[default]
    ClampToGround,
    /// Höhe relativ zum Gelände
    RelativeToGround,
    /// Absolute Höhe über dem Ellipsoid
    Absolute,
}

/// Punkt-Marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub position: Position,
    pub attributes: PlacemarkAttributes,
    pub altitude_mode: AltitudeMode,
    /// Unsichtbar bis zur ersten Positionierung
    pub visible: bool,
}

impl Placemark {
    /// Erstellt einen sichtbaren, bodengeklemmten Marker.
    pub fn new(position: Position, attributes: PlacemarkAttributes) -> Self {
        Self {
            position,
            attributes,
            altitude_mode: AltitudeMode::ClampToGround,
            visible: true,
        }
    }
}

/// Linienzug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub positions: Vec<Position>,
    pub attributes: ShapeAttributes,
    pub altitude_mode: AltitudeMode,
}

impl Polyline {
    /// Erstellt einen bodengeklemmten Linienzug.
    pub fn new(positions: Vec<Position>, attributes: ShapeAttributes) -> Self {
        Self {
            positions,
            attributes,
            altitude_mode: AltitudeMode::ClampToGround,
        }
    }
}
