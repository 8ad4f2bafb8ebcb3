//! Globe Shape Editor Library.
//! Interaktive Bearbeitung geographischer Vektor-Formen (Polygon, Pfad, Kreis,
//! Ellipse, Rechteck) auf einer Globus-Oberflaeche. Kontrollpunkte greifen,
//! Vertices verschieben, rotieren, skalieren; das Original wird erst bei
//! explizitem Apply veraendert.

pub mod core;
pub mod editor;
pub mod shared;

pub use core::{
    AltitudeMode, Boundary, Color, Globe, Location, Placemark, PlacemarkAttributes, Polyline,
    Position, Shape, ShapeAttributes, ShapeGeometry, SphericalGlobe,
};
pub use editor::{
    Accessory, ControlAttributes, ControlPoint, ControlPurpose, FragmentRegistry, ShapeEditor,
    ShapeEditorFragment,
};
