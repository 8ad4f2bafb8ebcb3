//! Pfad-Fragment: wie Polygon, aber über einer offenen Punktfolge.

use super::common;
use super::ShapeEditorFragment;
use crate::core::{Globe, Location, Position, Shape, ShapeGeometry};
use crate::editor::control_point::{Accessory, ControlAttributes, ControlPoint, ControlPurpose};
use anyhow::bail;

/// Kleinste zulässige Pfad-Länge beim Vertex-Entfernen.
const MIN_PATH_VERTICES: usize = 2;

/// Fragment für offene Linienzüge.
#[derive(Debug, Default)]
pub struct PathFragment;

impl ShapeEditorFragment for PathFragment {
    fn name(&self) -> &str {
        "Pfad"
    }

    fn can_handle(&self, shape: &Shape) -> bool {
        matches!(shape.geometry, ShapeGeometry::Path { .. })
    }

    fn create_shadow_shape(&self, shape: &Shape) -> Shape {
        Shape {
            geometry: shape.geometry.clone(),
            attributes: shape.attributes,
            highlight_attributes: shape.highlight_attributes,
        }
    }

    fn shape_center(&self, shape: &Shape, globe: &dyn Globe) -> Option<Location> {
        let ShapeGeometry::Path { locations } = &shape.geometry else {
            return None;
        };
        common::center_of_locations(globe, locations)
    }

    fn initialize_control_elements(
        &self,
        shape: &Shape,
        control_points: &mut Vec<ControlPoint>,
        accessories: &mut Vec<Accessory>,
        attributes: &ControlAttributes,
    ) {
        let ShapeGeometry::Path { locations } = &shape.geometry else {
            return;
        };
        for index in 0..locations.len() {
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
        let ShapeGeometry::Path { locations } = &shape.geometry else {
            return;
        };
        common::update_outline_control_elements(globe, locations, control_points, accessories);
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
        let ShapeGeometry::Path { locations } = &mut shape.geometry else {
            log::error!("Pfad-Fragment mit Form-Art {kind} aufgerufen");
            bail!("Pfad-Fragment mit Form-Art {kind} aufgerufen");
        };

        match control_point.purpose {
            ControlPurpose::Location => {
                let Some(index) = control_point.index else {
                    log::error!("Location-Kontrollpunkt ohne Vertex-Index");
                    bail!("Location-Kontrollpunkt ohne Vertex-Index");
                };
                if secondary {
                    if locations.len() > MIN_PATH_VERTICES && index < locations.len() {
                        locations.remove(index);
                        log::info!("Vertex {index} entfernt");
                    } else {
                        log::warn!("Vertex {index} nicht entfernt: Pfad an Mindestlänge");
                    }
                } else if let Some(slot) = locations.get_mut(index) {
                    let delta = common::control_point_delta(globe, current, previous);
                    *slot = common::move_location(
                        globe,
                        control_point.position().location(),
                        delta,
                    );
                }
            }
            ControlPurpose::Rotation => {
                let center = common::center_of_locations(globe, locations.iter());
                if let Some(center) = center {
                    common::rotate_locations(center, current, previous, locations.iter_mut());
                }
            }
            ControlPurpose::Drag => {
                let delta = common::control_point_delta(globe, current, previous);
                common::move_locations(globe, locations.iter_mut(), delta);
            }
            other => {
                log::error!("Pfad-Fragment kann Zweck {other:?} nicht bedienen");
                bail!("Pfad-Fragment kann Zweck {other:?} nicht bedienen");
            }
        }
        Ok(())
    }
}
