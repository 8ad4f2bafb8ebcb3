//! Kreis-Fragment: ein Radius-Handle östlich des Zentrums.

use super::common;
use super::ShapeEditorFragment;
use crate::core::{Globe, Location, Position, Shape, ShapeGeometry};
use crate::editor::control_point::{Accessory, ControlAttributes, ControlPoint, ControlPurpose};
use crate::shared::great_circle;
use anyhow::bail;

/// Azimut des Radius-Handles in Grad (Ost).
const RADIUS_HANDLE_AZIMUTH: f64 = 90.0;

/// Fragment für Kreise.
///
/// Resize ist immer zentrums-symmetrisch: ein einzelner Radius hat keine
/// sinnvolle einseitige Variante.
#[derive(Debug, Default)]
pub struct CircleFragment;

impl ShapeEditorFragment for CircleFragment {
    fn name(&self) -> &str {
        "Kreis"
    }

    fn can_handle(&self, shape: &Shape) -> bool {
        matches!(shape.geometry, ShapeGeometry::Circle { .. })
    }

    fn create_shadow_shape(&self, shape: &Shape) -> Shape {
        Shape {
            geometry: shape.geometry.clone(),
            attributes: shape.attributes,
            highlight_attributes: shape.highlight_attributes,
        }
    }

    fn shape_center(&self, shape: &Shape, _globe: &dyn Globe) -> Option<Location> {
        match &shape.geometry {
            ShapeGeometry::Circle { center, .. } => Some(*center),
            _ => None,
        }
    }

    fn initialize_control_elements(
        &self,
        _shape: &Shape,
        control_points: &mut Vec<ControlPoint>,
        _accessories: &mut Vec<Accessory>,
        attributes: &ControlAttributes,
    ) {
        control_points.push(ControlPoint::for_shape(
            ControlPurpose::Radius,
            attributes.resize,
        ));
    }

    fn update_control_elements(
        &self,
        shape: &Shape,
        globe: &dyn Globe,
        control_points: &mut [ControlPoint],
        _accessories: &mut [Accessory],
    ) {
        let ShapeGeometry::Circle { center, radius } = &shape.geometry else {
            return;
        };
        let handle = great_circle::destination(
            *center,
            RADIUS_HANDLE_AZIMUTH,
            *radius / globe.equatorial_radius(),
        );
        for control_point in control_points.iter_mut() {
            if control_point.purpose == ControlPurpose::Radius {
                control_point.set_location(handle);
            }
        }
    }

    fn reshape(
        &self,
        shape: &mut Shape,
        globe: &dyn Globe,
        control_point: &ControlPoint,
        current: Position,
        previous: Position,
        _secondary: bool,
    ) -> anyhow::Result<()> {
        let kind = shape.geometry.kind_name();
        let ShapeGeometry::Circle { center, radius } = &mut shape.geometry else {
            log::error!("Kreis-Fragment mit Form-Art {kind} aufgerufen");
            bail!("Kreis-Fragment mit Form-Art {kind} aufgerufen");
        };
        let delta = common::control_point_delta(globe, current, previous);

        match control_point.purpose {
            ControlPurpose::Radius => {
                let Some((new_radius, _)) = common::resize_along_axis(
                    globe,
                    *center,
                    *radius,
                    control_point.position().location(),
                    delta,
                    false,
                ) else {
                    return Ok(());
                };
                if new_radius > 0.0 {
                    *radius = new_radius;
                } else {
                    log::debug!("Radius-Resize ignoriert: {new_radius:.2} m nicht positiv");
                }
            }
            ControlPurpose::Drag => {
                *center = common::move_location(globe, *center, delta);
            }
            other => {
                log::error!("Kreis-Fragment kann Zweck {other:?} nicht bedienen");
                bail!("Kreis-Fragment kann Zweck {other:?} nicht bedienen");
            }
        }
        Ok(())
    }
}
