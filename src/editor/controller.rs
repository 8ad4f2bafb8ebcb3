//! Session-Controller: orchestriert Fragments, Schatten-Form und
//! Kontroll-Elemente.

use crate::core::{Globe, Location, Position, Shape, ShapeGeometry};
use crate::editor::control_point::{Accessory, ControlAttributes, ControlPoint, ControlPurpose};
use crate::editor::fragments::{common, FragmentRegistry, ShapeEditorFragment};
use anyhow::bail;

/// Aktive Edit-Session: exklusiver Eigentümer von Original und Schatten-Form.
///
/// Die Schatten-Form ist die live gerenderte Editier-Kopie; das Original
/// bleibt bis `apply` unverändert und teilt keine Boundary mit dem Schatten.
struct EditSession {
    original: Shape,
    shadow: Shape,
    fragment_index: usize,
    control_points: Vec<ControlPoint>,
    accessories: Vec<Accessory>,
}

/// Interaktiver Editor für jeweils eine Form.
///
/// Pointer-Events (Drag mit aktueller/vorheriger Terrain-Position) liefert
/// die Picking-Schicht; der Editor wählt das passende Fragment und hält die
/// Kontroll-Elemente aktuell. Alle Operationen laufen synchron auf dem
/// Aufrufer-Thread; es ist höchstens eine Session gleichzeitig aktiv.
pub struct ShapeEditor {
    registry: FragmentRegistry,
    control_attributes: ControlAttributes,
    session: Option<EditSession>,
}

impl Default for ShapeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeEditor {
    /// Editor mit den Standard-Fragments und Standard-Handle-Attributen.
    pub fn new() -> Self {
        Self::with_registry(FragmentRegistry::new())
    }

    /// Editor mit eigener Registry (z.B. zusätzliche Form-Arten).
    pub fn with_registry(registry: FragmentRegistry) -> Self {
        Self {
            registry,
            control_attributes: ControlAttributes::default(),
            session: None,
        }
    }

    /// Überschreibt die Handle-Attribute für künftige Sessions.
    pub fn set_control_attributes(&mut self, attributes: ControlAttributes) {
        self.control_attributes = attributes;
    }

    /// Läuft gerade eine Edit-Session?
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Die live gerenderte Editier-Kopie der aktuellen Session.
    pub fn shadow_shape(&self) -> Option<&Shape> {
        self.session.as_ref().map(|session| &session.shadow)
    }

    /// Kontrollpunkte der aktuellen Session (leer ohne Session).
    pub fn control_points(&self) -> &[ControlPoint] {
        self.session
            .as_ref()
            .map_or(&[], |session| session.control_points.as_slice())
    }

    /// Zubehör der aktuellen Session (leer ohne Session).
    pub fn accessories(&self) -> &[Accessory] {
        self.session
            .as_ref()
            .map_or(&[], |session| session.accessories.as_slice())
    }

    /// Startet eine Edit-Session und übernimmt die Form.
    ///
    /// Legt die Schatten-Form an, erzeugt die Kontroll-Elemente und
    /// positioniert sie. Schlägt fehl, wenn bereits eine Session läuft oder
    /// kein Fragment die Form-Art bedient (Verdrahtungsfehler).
    pub fn start_editing(&mut self, shape: Shape, globe: &dyn Globe) -> anyhow::Result<()> {
        if self.session.is_some() {
            log::error!("Edit-Session bereits aktiv");
            bail!("Edit-Session bereits aktiv");
        }
        let kind = shape.geometry.kind_name();
        let Some(fragment_index) = self.registry.fragment_index_for(&shape) else {
            log::error!("Kein Fragment für Form-Art {kind} registriert");
            bail!("Kein Fragment für Form-Art {kind} registriert");
        };
        let fragment = fragment_of(&self.registry, fragment_index)?;

        let shadow = fragment.create_shadow_shape(&shape);
        let mut control_points = Vec::new();
        let mut accessories = Vec::new();
        fragment.initialize_control_elements(
            &shadow,
            &mut control_points,
            &mut accessories,
            &self.control_attributes,
        );
        fragment.update_control_elements(&shadow, globe, &mut control_points, &mut accessories);

        log::info!(
            "Edit-Session gestartet: {} mit {} Kontrollpunkten",
            fragment.name(),
            control_points.len()
        );
        self.session = Some(EditSession {
            original: shape,
            shadow,
            fragment_index,
            control_points,
            accessories,
        });
        Ok(())
    }

    /// Wendet einen Drag auf den Kontrollpunkt `control_point_index` an.
    ///
    /// `current`/`previous` sind Terrain-Positionen aus der Picking-Schicht;
    /// `secondary` ist das Zweit-Verhalten (gehaltene Modifier-Taste).
    pub fn reshape(
        &mut self,
        globe: &dyn Globe,
        control_point_index: usize,
        current: Position,
        previous: Position,
        secondary: bool,
    ) -> anyhow::Result<()> {
        let Some(session) = self.session.as_mut() else {
            log::error!("Reshape ohne aktive Edit-Session");
            bail!("Reshape ohne aktive Edit-Session");
        };
        let Some(control_point) = session.control_points.get(control_point_index).cloned() else {
            log::error!("Kontrollpunkt-Index {control_point_index} außerhalb der Session");
            bail!("Kontrollpunkt-Index {control_point_index} außerhalb der Session");
        };
        let fragment = fragment_of(&self.registry, session.fragment_index)?;

        fragment.reshape(
            &mut session.shadow,
            globe,
            &control_point,
            current,
            previous,
            secondary,
        )?;
        // Vertex-Entfernen (secondary auf einem Location-Handle) ändert die
        // Anzahl der Kontrollpunkte
        if secondary && control_point.purpose == ControlPurpose::Location {
            rebuild_control_elements(session, fragment, globe, &self.control_attributes);
        } else {
            fragment.update_control_elements(
                &session.shadow,
                globe,
                &mut session.control_points,
                &mut session.accessories,
            );
        }
        Ok(())
    }

    /// Verschiebt die gesamte Form (Body-Drag ohne getroffenen Kontrollpunkt).
    pub fn drag_shape(
        &mut self,
        globe: &dyn Globe,
        current: Position,
        previous: Position,
    ) -> anyhow::Result<()> {
        let Some(session) = self.session.as_mut() else {
            log::error!("Drag ohne aktive Edit-Session");
            bail!("Drag ohne aktive Edit-Session");
        };
        let fragment = fragment_of(&self.registry, session.fragment_index)?;

        let mut drag_point =
            ControlPoint::for_shape(ControlPurpose::Drag, self.control_attributes.location);
        drag_point.set_location(previous.location());

        fragment.reshape(
            &mut session.shadow,
            globe,
            &drag_point,
            current,
            previous,
            false,
        )?;
        fragment.update_control_elements(
            &session.shadow,
            globe,
            &mut session.control_points,
            &mut session.accessories,
        );
        Ok(())
    }

    /// Fügt einen Vertex an der nächstgelegenen Boundary-Kante ein.
    ///
    /// Nur für Polygon und Pfad; die Kontroll-Elemente werden anschließend
    /// vollständig neu aufgebaut, da sich ihre Anzahl geändert hat.
    pub fn add_vertex(&mut self, globe: &dyn Globe, picked: Position) -> anyhow::Result<()> {
        let Some(session) = self.session.as_mut() else {
            log::error!("Vertex-Einfügen ohne aktive Edit-Session");
            bail!("Vertex-Einfügen ohne aktive Edit-Session");
        };
        let fragment = fragment_of(&self.registry, session.fragment_index)?;

        let kind = session.shadow.geometry.kind_name();
        let inserted = match &mut session.shadow.geometry {
            ShapeGeometry::Polygon { boundary } => {
                common::insert_vertex_near(globe, boundary, picked, true)
            }
            ShapeGeometry::Path { locations } => {
                common::insert_vertex_into_path(globe, locations, picked).map(|index| {
                    common::VertexInsertion { ring: 0, index }
                })
            }
            _ => {
                log::error!("Vertex-Einfügen wird von {kind} nicht unterstützt");
                bail!("Vertex-Einfügen wird von {kind} nicht unterstützt");
            }
        };
        let Some(insertion) = inserted else {
            log::warn!("Keine Kante für Vertex-Einfügung gefunden");
            return Ok(());
        };
        log::info!(
            "Vertex eingefügt: Ring {}, Index {}",
            insertion.ring,
            insertion.index
        );

        rebuild_control_elements(session, fragment, globe, &self.control_attributes);
        Ok(())
    }

    /// Übernimmt die Schatten-Geometrie ins Original und beendet die Session.
    pub fn apply(&mut self) -> Option<Shape> {
        let session = self.session.take()?;
        let mut shape = session.original;
        shape.geometry = session.shadow.geometry;
        log::info!("Edit-Session übernommen: {}", shape.geometry.kind_name());
        Some(shape)
    }

    /// Verwirft die Schatten-Form und gibt das unveränderte Original zurück.
    pub fn cancel(&mut self) -> Option<Shape> {
        let session = self.session.take()?;
        log::info!(
            "Edit-Session verworfen: {}",
            session.original.geometry.kind_name()
        );
        Some(session.original)
    }

    /// Zentrum der aktuell bearbeiteten (Schatten-)Form.
    pub fn shape_center(&self, globe: &dyn Globe) -> Option<Location> {
        let session = self.session.as_ref()?;
        self.registry
            .fragment_at(session.fragment_index)?
            .shape_center(&session.shadow, globe)
    }
}

/// Voller Neuaufbau der Kontroll-Elemente nach Änderungen der Vertex-Anzahl.
fn rebuild_control_elements(
    session: &mut EditSession,
    fragment: &dyn ShapeEditorFragment,
    globe: &dyn Globe,
    attributes: &ControlAttributes,
) {
    session.control_points.clear();
    session.accessories.clear();
    fragment.initialize_control_elements(
        &session.shadow,
        &mut session.control_points,
        &mut session.accessories,
        attributes,
    );
    fragment.update_control_elements(
        &session.shadow,
        globe,
        &mut session.control_points,
        &mut session.accessories,
    );
}

/// Fragment einer laufenden Session; die Registry schrumpft nie, ein
/// ungültiger Index wäre ein Verdrahtungsfehler.
fn fragment_of(
    registry: &FragmentRegistry,
    fragment_index: usize,
) -> anyhow::Result<&dyn ShapeEditorFragment> {
    match registry.fragment_at(fragment_index) {
        Some(fragment) => Ok(fragment),
        None => {
            log::error!("Fragment-Registry inkonsistent: Index {fragment_index}");
            bail!("Fragment-Registry inkonsistent: Index {fragment_index}")
        }
    }
}
