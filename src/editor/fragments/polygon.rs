//! Polygon-Fragment: Vertex-, Rotations- und Drag-Bearbeitung für Polygone.

use super::common;
use super::ShapeEditorFragment;
use crate::core::{Globe, Location, Position, Shape, ShapeGeometry};
use crate::editor::control_point::{Accessory, ControlAttributes, ControlPoint, ControlPurpose};
use anyhow::bail;

/// Kleinste zulässige Ring-Größe beim Vertex-Entfernen.
const MIN_RING_VERTICES: usize = 3;

/// Fragment für geschlossene Polygone (inkl. Ringe mit Löchern).
#[derive(Debug, Default)]
pub struct PolygonFragment;

impl ShapeEditorFragment for PolygonFragment {
    fn name(&self) -> &str {
        "Polygon"
    }

    fn can_handle(&self, shape: &Shape) -> bool {
        matches!(shape.geometry, ShapeGeometry::Polygon { .. })
    }

    fn create_shadow_shape(&self, shape: &Shape) -> Shape {
        let geometry = match &shape.geometry {
            ShapeGeometry::Polygon { boundary } => ShapeGeometry::Polygon {
                boundary: boundary.deep_copy(),
            },
            other => other.clone(),
        };
        Shape {
            geometry,
            attributes: shape.attributes,
            highlight_attributes: shape.highlight_attributes,
        }
    }

    fn shape_center(&self, shape: &Shape, globe: &dyn Globe) -> Option<Location> {
        let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
            return None;
        };
        common::center_of_locations(globe, boundary.locations())
    }

    fn initialize_control_elements(
        &self,
        shape: &Shape,
        control_points: &mut Vec<ControlPoint>,
        accessories: &mut Vec<Accessory>,
        attributes: &ControlAttributes,
    ) {
        let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
            return;
        };
        for index in 0..boundary.vertex_count() {
            control_points.push(ControlPoint::for_vertex(index, attributes.location));
        }
        control_points.push(ControlPoint::for_shape(
            ControlPurpose::Rotation,
            attributes.rotate,
        ));
        accessories.push(common::make_rotation_accessory(&attributes.rotate));
    }

    fn update_control_elements(
        &self,
        shape: &Shape,
        globe: &dyn Globe,
        control_points: &mut [ControlPoint],
        accessories: &mut [Accessory],
    ) {
        let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
            return;
        };
        let vertices: Vec<Location> = boundary.locations().copied().collect();
        common::update_outline_control_elements(globe, &vertices, control_points, accessories);
    }

    fn reshape(
        &self,
        shape: &mut Shape,
        globe: &dyn Globe,
        control_point: &ControlPoint,
        current: Position,
        previous: Position,
        secondary: bool,
    ) -> anyhow::Result<()> {
        let kind = shape.geometry.kind_name();
        let ShapeGeometry::Polygon { boundary } = &mut shape.geometry else {
            log::error!("Polygon-Fragment mit Form-Art {kind} aufgerufen");
            bail!("Polygon-Fragment mit Form-Art {kind} aufgerufen");
        };

        match control_point.purpose {
            ControlPurpose::Location => {
                let Some(index) = control_point.index else {
                    log::error!("Location-Kontrollpunkt ohne Vertex-Index");
                    bail!("Location-Kontrollpunkt ohne Vertex-Index");
                };
                if secondary {
                    if common::remove_vertex(boundary, index, MIN_RING_VERTICES) {
                        log::info!("Vertex {index} entfernt");
                    } else {
                        log::warn!("Vertex {index} nicht entfernt: Ring an Mindestgröße");
                    }
                } else {
                    let delta = common::control_point_delta(globe, current, previous);
                    let moved =
                        common::move_location(globe, control_point.position().location(), delta);
                    boundary.set_location_at(index, moved);
                }
            }
            ControlPurpose::Rotation => {
                let center = common::center_of_locations(globe, boundary.locations());
                if let Some(center) = center {
                    common::rotate_locations(center, current, previous, boundary.locations_mut());
                }
            }
            ControlPurpose::Drag => {
                let delta = common::control_point_delta(globe, current, previous);
                common::move_locations(globe, boundary.locations_mut(), delta);
            }
            other => {
                log::error!("Polygon-Fragment kann Zweck {other:?} nicht bedienen");
                bail!("Polygon-Fragment kann Zweck {other:?} nicht bedienen");
            }
        }
        Ok(())
    }
}
