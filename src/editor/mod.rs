//! Editor-Schicht: Kontrollpunkte, Form-Fragments und Session-Controller.

pub mod control_point;
pub mod controller;
pub mod fragments;

pub use control_point::{Accessory, ControlAttributes, ControlPoint, ControlPurpose};
pub use controller::ShapeEditor;
pub use fragments::{FragmentRegistry, ShapeEditorFragment};
