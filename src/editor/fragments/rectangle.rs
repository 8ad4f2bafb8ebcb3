//! Rechteck-Fragment: Seiten-Handles an den halben Ausdehnungen.

use super::common;
use super::ShapeEditorFragment;
use crate::core::{Globe, Location, Position, Shape, ShapeGeometry};
use crate::editor::control_point::{Accessory, ControlAttributes, ControlPoint, ControlPurpose};
use crate::shared::geometry::normalized_heading;
use crate::shared::great_circle;
use anyhow::bail;

/// Fragment für Rechtecke.
///
/// Breite/Höhe sind volle Seitenlängen; die Handles sitzen an den halben
/// Ausdehnungen auf den beiden Achsen.
#[derive(Debug, Default)]
pub struct RectangleFragment;

impl ShapeEditorFragment for RectangleFragment {
    fn name(&self) -> &str {
        "Rechteck"
    }

    fn can_handle(&self, shape: &Shape) -> bool {
        matches!(shape.geometry, ShapeGeometry::Rectangle { .. })
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
            ShapeGeometry::Rectangle { center, .. } => Some(*center),
            _ => None,
        }
    }

    fn initialize_control_elements(
        &self,
        _shape: &Shape,
        control_points: &mut Vec<ControlPoint>,
        accessories: &mut Vec<Accessory>,
        attributes: &ControlAttributes,
    ) {
        control_points.push(ControlPoint::for_shape(
            ControlPurpose::Width,
            attributes.resize,
        ));
        control_points.push(ControlPoint::for_shape(
            ControlPurpose::Height,
            attributes.resize,
        ));
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
        let ShapeGeometry::Rectangle {
            center,
            width,
            height,
            heading,
        } = &shape.geometry
        else {
            return;
        };
        let radius = globe.equatorial_radius();
        let width_handle =
            great_circle::destination(*center, *heading + 90.0, (*width / 2.0) / radius);
        let height_handle = great_circle::destination(*center, *heading, (*height / 2.0) / radius);
        let rotation_handle = great_circle::destination(
            *center,
            *heading,
            common::ROTATION_HANDLE_OFFSET * (*height / 2.0) / radius,
        );

        for control_point in control_points.iter_mut() {
            match control_point.purpose {
                ControlPurpose::Width => control_point.set_location(width_handle),
                ControlPurpose::Height => control_point.set_location(height_handle),
                ControlPurpose::Rotation => control_point.set_location(rotation_handle),
                _ => {}
            }
        }
        if let Some(accessory) = accessories.first_mut() {
            common::update_rotation_accessory(accessory, *center, rotation_handle);
        }
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
        let ShapeGeometry::Rectangle {
            center,
            width,
            height,
            heading,
        } = &mut shape.geometry
        else {
            log::error!("Rechteck-Fragment mit Form-Art {kind} aufgerufen");
            bail!("Rechteck-Fragment mit Form-Art {kind} aufgerufen");
        };

        match control_point.purpose {
            ControlPurpose::Width | ControlPurpose::Height => {
                let delta = common::control_point_delta(globe, current, previous);
                let full_extent = if control_point.purpose == ControlPurpose::Width {
                    *width
                } else {
                    *height
                };
                let Some((new_half, new_center)) = common::resize_along_axis(
                    globe,
                    *center,
                    full_extent / 2.0,
                    control_point.position().location(),
                    delta,
                    secondary,
                ) else {
                    return Ok(());
                };
                if new_half <= 0.0 {
                    log::debug!("Resize ignoriert: Halbmesser {new_half:.2} m nicht positiv");
                    return Ok(());
                }
                if control_point.purpose == ControlPurpose::Width {
                    *width = new_half * 2.0;
                } else {
                    *height = new_half * 2.0;
                }
                *center = new_center;
            }
            ControlPurpose::Rotation => {
                let previous_azimuth = great_circle::azimuth(*center, previous.location());
                let current_azimuth = great_circle::azimuth(*center, current.location());
                *heading = normalized_heading(*heading, current_azimuth - previous_azimuth);
            }
            ControlPurpose::Drag => {
                let delta = common::control_point_delta(globe, current, previous);
                *center = common::move_location(globe, *center, delta);
            }
            other => {
                log::error!("Rechteck-Fragment kann Zweck {other:?} nicht bedienen");
                bail!("Rechteck-Fragment kann Zweck {other:?} nicht bedienen");
            }
        }
        Ok(())
    }
}
