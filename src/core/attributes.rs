//! Darstellungs-Attribute für Formen und Kontroll-Marker.

use serde::{Deserialize, Serialize};

/// RGBA-Farbe, Komponenten in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Attribute für Flächen-Formen (Interior + Outline).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeAttributes {
    pub interior_color: Color,
    pub outline_color: Color,
    /// Linienbreite in Pixeln
    pub outline_width: f64,
    pub draw_interior: bool,
    pub draw_outline: bool,
}

impl Default for ShapeAttributes {
    fn default() -> Self {
        Self {
            interior_color: Color::new(0.8, 0.8, 0.8, 0.5),
            outline_color: Color::WHITE,
            outline_width: 2.0,
            draw_interior: true,
            draw_outline: true,
        }
    }
}

/// Attribute für Punkt-Marker (Kontrollpunkte).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacemarkAttributes {
    pub color: Color,
    /// Marker-Durchmesser in Pixeln
    pub size: f64,
}

impl Default for PlacemarkAttributes {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            size: 12.0,
        }
    }
}
