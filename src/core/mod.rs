//! Core-Domänentypen: Locations, Boundaries, Shapes, Globus und Render-Primitive.

pub mod attributes;
pub mod boundary;
pub mod globe;
pub mod location;
pub mod renderables;
pub mod shape;

pub use attributes::{Color, PlacemarkAttributes, ShapeAttributes};
pub use boundary::Boundary;
pub use globe::{Globe, SphericalGlobe};
pub use location::{Location, Position};
pub use renderables::{AltitudeMode, Placemark, Polyline};
pub use shape::{Shape, ShapeGeometry};
