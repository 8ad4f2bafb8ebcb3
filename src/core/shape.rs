//! Formen: Geometrie-Varianten und Attribut-Hülle.

use super::{Boundary, Location, ShapeAttributes};
use serde::{Deserialize, Serialize};

/// Geometrie einer Form auf der Globus-Oberfläche.
///
/// Maße (Radius, Breite, Höhe) in Metern; Heading in Grad im Uhrzeigersinn
/// ab Nord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    /// Geschlossenes Polygon, optional mit Löchern
    Polygon { boundary: Boundary },
    /// Offener Linienzug
    Path { locations: Vec<Location> },
    /// Kreis um ein Zentrum
    Circle { center: Location, radius: f64 },
    /// Ellipse mit Haupt-/Nebenradius und Heading
    Ellipse {
        center: Location,
        major_radius: f64,
        minor_radius: f64,
        heading: f64,
    },
    /// Rechteck mit Breite/Höhe und Heading
    Rectangle {
        center: Location,
        width: f64,
        height: f64,
        heading: f64,
    },
}

impl ShapeGeometry {
    /// Anzeigename der Form-Art (für Logs und Fehlermeldungen).
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeGeometry::Polygon { .. } => "Polygon",
            ShapeGeometry::Path { .. } => "Pfad",
            ShapeGeometry::Circle { .. } => "Kreis",
            ShapeGeometry::Ellipse { .. } => "Ellipse",
            ShapeGeometry::Rectangle { .. } => "Rechteck",
        }
    }
}

/// Eine editierbare Form: Geometrie plus Darstellungs-Attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub geometry: ShapeGeometry,
    pub attributes: ShapeAttributes,
    /// Attribute im Highlight-Zustand (z.B. während der Bearbeitung)
    pub highlight_attributes: Option<ShapeAttributes>,
}

impl Shape {
    /// Erstellt eine Form ohne Highlight-Attribute.
    pub fn new(geometry: ShapeGeometry, attributes: ShapeAttributes) -> Self {
        Self {
            geometry,
            attributes,
            highlight_attributes: None,
        }
    }

    /// Polygon aus einer Ring-Liste (äußerer Ring zuerst).
    pub fn polygon(rings: Vec<Vec<Location>>, attributes: ShapeAttributes) -> Self {
        Self::new(
            ShapeGeometry::Polygon {
                boundary: Boundary::Ringed(rings),
            },
            attributes,
        )
    }

    /// Polygon mit einem einzelnen Ring als flacher Boundary.
    pub fn simple_polygon(ring: Vec<Location>, attributes: ShapeAttributes) -> Self {
        Self::new(
            ShapeGeometry::Polygon {
                boundary: Boundary::Flat(ring),
            },
            attributes,
        )
    }

    /// Offener Pfad.
    pub fn path(locations: Vec<Location>, attributes: ShapeAttributes) -> Self {
        Self::new(ShapeGeometry::Path { locations }, attributes)
    }

    /// Kreis; Radius in Metern.
    pub fn circle(center: Location, radius: f64, attributes: ShapeAttributes) -> Self {
        Self::new(ShapeGeometry::Circle { center, radius }, attributes)
    }

    /// Ellipse; Radien in Metern, Heading in Grad.
    pub fn ellipse(
        center: Location,
        major_radius: f64,
        minor_radius: f64,
        heading: f64,
        attributes: ShapeAttributes,
    ) -> Self {
        Self::new(
            ShapeGeometry::Ellipse {
                center,
                major_radius,
                minor_radius,
                heading,
            },
            attributes,
        )
    }

    /// Rechteck; Seitenlängen in Metern, Heading in Grad.
    pub fn rectangle(
        center: Location,
        width: f64,
        height: f64,
        heading: f64,
        attributes: ShapeAttributes,
    ) -> Self {
        Self::new(
            ShapeGeometry::Rectangle {
                center,
                width,
                height,
                heading,
            },
            attributes,
        )
    }
}
