//! Layer-neutrale Geometrie-Funktionen.
//!
//! Kann von `core`, `editor` und Tests importiert werden, ohne
//! Zirkel-Abhängigkeiten zu erzeugen.

pub mod geometry;
pub mod great_circle;

pub use geometry::{nearest_point_on_segment, normalized_heading};
