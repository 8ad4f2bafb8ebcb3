//! Trait-basiertes Fragment-System für die Form-Bearbeitung.
//!
//! Jede Form-Art wird von einem `ShapeEditorFragment` bedient, das bei der
//! `FragmentRegistry` registriert ist. Fragments sind zustandslos und
//! mutieren ausschließlich die Session-eigene Schatten-Form; den
//! Session-Zustand hält der Controller.

pub mod common;

mod circle;
mod ellipse;
mod path;
mod polygon;
mod rectangle;

pub use circle::CircleFragment;
pub use ellipse::EllipseFragment;
pub use path::PathFragment;
pub use polygon::PolygonFragment;
pub use rectangle::RectangleFragment;

use crate::core::{Globe, Location, Position, Shape};
use crate::editor::control_point::{Accessory, ControlAttributes, ControlPoint};

#[cfg(test)]
mod tests;

/// Schnittstelle für alle Form-Fragments.
pub trait ShapeEditorFragment {
    /// Anzeigename (für Logs und Fehlermeldungen)
    fn name(&self) -> &str;

    /// Kann dieses Fragment die Form bedienen? Reines Prädikat.
    fn can_handle(&self, shape: &Shape) -> bool;

    /// Erstellt eine vollständig unabhängige Kopie der Form.
    ///
    /// Spätere Mutation des Originals beeinflusst die Kopie nicht und
    /// umgekehrt.
    fn create_shadow_shape(&self, shape: &Shape) -> Shape;

    /// Geometrisches Zentrum der Form. `None` bei leerer Boundary.
    fn shape_center(&self, shape: &Shape, globe: &dyn Globe) -> Option<Location>;

    /// Legt Kontrollpunkte und Zubehör an, positioniert sie aber nicht.
    /// Wird einmal pro Edit-Session aufgerufen.
    fn initialize_control_elements(
        &self,
        shape: &Shape,
        control_points: &mut Vec<ControlPoint>,
        accessories: &mut Vec<Accessory>,
        attributes: &ControlAttributes,
    );

    /// Positioniert alle Kontrollpunkte/Zubehör passend zur aktuellen
    /// Geometrie. Wird nach jedem erfolgreichen Reshape und beim
    /// Session-Start aufgerufen.
    fn update_control_elements(
        &self,
        shape: &Shape,
        globe: &dyn Globe,
        control_points: &mut [ControlPoint],
        accessories: &mut [Accessory],
    );

    /// Wendet eine Reshape-Operation an.
    ///
    /// `secondary` schaltet die Zweit-Semantik des jeweiligen Handles um
    /// (einseitiges statt symmetrisches Resize, Vertex entfernen statt
    /// verschieben). Ein Zweck, den das Fragment nicht bedient, ist ein
    /// Verdrahtungsfehler und schlägt laut fehl.
    fn reshape(
        &self,
        shape: &mut Shape,
        globe: &dyn Globe,
        control_point: &ControlPoint,
        current: Position,
        previous: Position,
        secondary: bool,
    ) -> anyhow::Result<()>;
}

// ── FragmentRegistry ─────────────────────────────────────────────

/// Verwaltet registrierte Fragments und wählt per `can_handle` aus.
pub struct FragmentRegistry {
    fragments: Vec<Box<dyn ShapeEditorFragment>>,
}

impl Default for FragmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentRegistry {
    /// Registry mit den fünf Standard-Fragments.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(PolygonFragment));
        registry.register(Box::new(PathFragment));
        registry.register(Box::new(CircleFragment));
        registry.register(Box::new(EllipseFragment));
        registry.register(Box::new(RectangleFragment));
        registry
    }

    /// Leere Registry für Spezial-Setups mit eigenen Fragments.
    pub fn empty() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Registriert ein weiteres Fragment.
    pub fn register(&mut self, fragment: Box<dyn ShapeEditorFragment>) {
        self.fragments.push(fragment);
    }

    /// Anzahl registrierter Fragments.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Erstes Fragment, das die Form bedienen kann.
    pub fn fragment_for(&self, shape: &Shape) -> Option<&dyn ShapeEditorFragment> {
        self.fragment_index_for(shape)
            .and_then(|index| self.fragment_at(index))
    }

    /// Index des ersten passenden Fragments.
    pub fn fragment_index_for(&self, shape: &Shape) -> Option<usize> {
        self.fragments
            .iter()
            .position(|fragment| fragment.can_handle(shape))
    }

    /// Fragment an einem Registry-Index.
    pub fn fragment_at(&self, index: usize) -> Option<&dyn ShapeEditorFragment> {
        self.fragments.get(index).map(|fragment| fragment.as_ref())
    }
}
