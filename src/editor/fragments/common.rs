//! Gemeinsame Geometrie-Helfer für alle Form-Fragments.

use crate::core::{
    Boundary, Globe, Location, PlacemarkAttributes, Polyline, Position, ShapeAttributes,
};
use crate::editor::control_point::{Accessory, ControlPoint, ControlPurpose};
use crate::shared::geometry::nearest_point_on_segment;
use crate::shared::great_circle;
use glam::DVec3;

/// Versatz des Rotations-Handles relativ zur mittleren Form-Ausdehnung.
pub(crate) const ROTATION_HANDLE_OFFSET: f64 = 1.2;

/// Linienbreite des Rotations-Zubehörs in Pixeln.
const ACCESSORY_OUTLINE_WIDTH: f64 = 2.0;

/// Kartesische Differenz zweier Positionen auf Oberflächen-Höhe.
///
/// Grundlage aller Drag-Verschiebungen: beide Positionen werden auf Höhe 0
/// in Globus-Punkte gewandelt und subtrahiert.
pub fn control_point_delta(globe: &dyn Globe, current: Position, previous: Position) -> DVec3 {
    let current_point =
        globe.compute_point_from_position(current.latitude, current.longitude, 0.0);
    let previous_point =
        globe.compute_point_from_position(previous.latitude, previous.longitude, 0.0);
    current_point - previous_point
}

/// Rotations-Zubehör: Linie vom Form-Zentrum zum Rotations-Handle.
///
/// Übernimmt die Farbe des Handles; beide Endpunkte bleiben bis zur ersten
/// Positionierung am Ursprung.
pub(crate) fn make_rotation_accessory(handle_attributes: &PlacemarkAttributes) -> Accessory {
    let attributes = ShapeAttributes {
        outline_color: handle_attributes.color,
        outline_width: ACCESSORY_OUTLINE_WIDTH,
        draw_interior: false,
        ..ShapeAttributes::default()
    };
    Accessory {
        line: Polyline::new(vec![Position::default(), Position::default()], attributes),
    }
}

/// Schreibt die beiden Endpunkte des Rotations-Zubehörs neu.
pub(crate) fn update_rotation_accessory(
    accessory: &mut Accessory,
    center: Location,
    handle: Location,
) {
    accessory.line.positions = vec![
        Position::from_location(center, 0.0),
        Position::from_location(handle, 0.0),
    ];
}

/// Mittelpunkt einer Vertex-Menge als gemittelter Globus-Punkt.
///
/// Bei Ring-Boundaries gehen die Vertices aller Ringe ein.
/// `None` ohne Vertices.
pub fn center_of_locations<'a>(
    globe: &dyn Globe,
    locations: impl IntoIterator<Item = &'a Location>,
) -> Option<Location> {
    let mut sum = DVec3::ZERO;
    let mut count = 0usize;
    for location in locations {
        sum += globe.compute_point_from_location(*location);
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(
        globe
            .compute_position_from_point(sum / count as f64)
            .location(),
    )
}

/// Mittlere kartesische Distanz aller Vertices zum Zentrum, normiert auf den
/// Äquatorradius (Bogenmaß-äquivalente Einheit). 0.0 ohne Vertices.
pub fn average_distance<'a>(
    globe: &dyn Globe,
    center: Location,
    locations: impl IntoIterator<Item = &'a Location>,
) -> f64 {
    let center_point = globe.compute_point_from_location(center);
    let mut total = 0.0;
    let mut count = 0usize;
    for location in locations {
        total += globe
            .compute_point_from_location(*location)
            .distance(center_point);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    total / count as f64 / globe.equatorial_radius()
}

/// Verschiebt eine Location um einen kartesischen Delta-Vektor.
pub fn move_location(globe: &dyn Globe, location: Location, delta: DVec3) -> Location {
    let point = globe.compute_point_from_location(location) + delta;
    globe.compute_position_from_point(point).location()
}

/// Verschiebt alle Vertices um denselben Delta-Vektor.
pub fn move_locations<'a>(
    globe: &dyn Globe,
    locations: impl IntoIterator<Item = &'a mut Location>,
    delta: DVec3,
) {
    for location in locations {
        *location = move_location(globe, *location, delta);
    }
}

/// Rotiert alle Vertices um das Zentrum.
///
/// Das Delta ist die Azimut-Differenz zwischen vorheriger und aktueller
/// Drag-Position; jeder Vertex behält seine Großkreis-Distanz zum Zentrum.
/// Gibt das Delta-Heading in Grad zurück, damit Aufrufer ein
/// Heading-Attribut synchron halten können.
pub fn rotate_locations<'a>(
    center: Location,
    current: Position,
    previous: Position,
    locations: impl IntoIterator<Item = &'a mut Location>,
) -> f64 {
    let previous_azimuth = great_circle::azimuth(center, previous.location());
    let current_azimuth = great_circle::azimuth(center, current.location());
    let delta_heading = current_azimuth - previous_azimuth;
    if delta_heading == 0.0 {
        return 0.0;
    }

    for location in locations {
        let azimuth = great_circle::azimuth(center, *location);
        let distance = great_circle::distance(center, *location);
        *location = great_circle::destination(center, azimuth + delta_heading, distance);
    }
    delta_heading
}

/// Ergebnis einer Vertex-Einfügung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexInsertion {
    /// Ring, in den eingefügt wurde (0 bei flachen Boundaries)
    pub ring: usize,
    /// Lokaler Index des neuen Vertex im Ring
    pub index: usize,
}

/// Fügt an der Boundary-Kante, die `picked` am nächsten liegt, einen neuen
/// Vertex ein.
///
/// `closed` nimmt pro Ring das Schließ-Segment (letzter → erster Vertex)
/// mit auf; beim Schließ-Segment wird angehängt, sonst gespleißt. Bei
/// Distanz-Gleichstand gewinnt die zuerst gefundene Kante (striktes `<`).
pub fn insert_vertex_near(
    globe: &dyn Globe,
    boundary: &mut Boundary,
    picked: Position,
    closed: bool,
) -> Option<VertexInsertion> {
    let picked_point = globe.compute_point_from_position(picked.latitude, picked.longitude, 0.0);

    let mut best: Option<(f64, usize, usize, DVec3)> = None;
    for ring_index in 0..boundary.ring_count() {
        let Some(ring) = boundary.ring(ring_index) else {
            continue;
        };
        let Some((distance, local_index, on_edge)) = scan_ring(globe, ring, closed, picked_point)
        else {
            continue;
        };
        let better = best
            .as_ref()
            .is_none_or(|(best_distance, ..)| distance < *best_distance);
        if better {
            best = Some((distance, ring_index, local_index, on_edge));
        }
    }

    let (_, ring_index, local_index, on_edge) = best?;
    let location = globe.compute_position_from_point(on_edge).location();
    if !boundary.insert_location(ring_index, local_index, location) {
        return None;
    }
    log::debug!(
        "Vertex in Ring {} an Index {} eingefügt",
        ring_index,
        local_index
    );
    Some(VertexInsertion {
        ring: ring_index,
        index: local_index,
    })
}

/// Vertex-Einfügung für offene Pfade; gibt den Einfüge-Index zurück.
pub fn insert_vertex_into_path(
    globe: &dyn Globe,
    locations: &mut Vec<Location>,
    picked: Position,
) -> Option<usize> {
    let picked_point = globe.compute_point_from_position(picked.latitude, picked.longitude, 0.0);
    let (_, index, on_edge) = scan_ring(globe, locations, false, picked_point)?;
    locations.insert(index, globe.compute_position_from_point(on_edge).location());
    Some(index)
}

/// Beste Einfüge-Kante eines Rings: (Distanz, lokaler Einfüge-Index,
/// projizierter Punkt). `Einfüge-Index == Ring-Länge` markiert das
/// Schließ-Segment.
fn scan_ring(
    globe: &dyn Globe,
    ring: &[Location],
    closed: bool,
    picked: DVec3,
) -> Option<(f64, usize, DVec3)> {
    if ring.len() < 2 {
        return None;
    }
    let points: Vec<DVec3> = ring
        .iter()
        .map(|location| globe.compute_point_from_location(*location))
        .collect();
    let edge_count = if closed { points.len() } else { points.len() - 1 };

    let mut best: Option<(f64, usize, DVec3)> = None;
    for edge in 0..edge_count {
        let p1 = points[edge];
        let p2 = points[(edge + 1) % points.len()];
        let on_edge = nearest_point_on_segment(p1, p2, picked);
        let distance = on_edge.distance(picked);
        let better = best
            .as_ref()
            .is_none_or(|(best_distance, _, _)| distance < *best_distance);
        if better {
            best = Some((distance, edge + 1, on_edge));
        }
    }
    best
}

/// Entfernt den Vertex am flachen Index, sofern der betroffene Ring mehr als
/// `min_vertices` behält.
pub(crate) fn remove_vertex(boundary: &mut Boundary, index: usize, min_vertices: usize) -> bool {
    let Some((ring_index, _)) = boundary.resolve_index(index) else {
        return false;
    };
    let Some(ring_len) = boundary.ring_len(ring_index) else {
        return false;
    };
    if ring_len <= min_vertices {
        return false;
    }
    boundary.remove_location_at(index).is_some()
}

/// Einseitiges oder symmetrisches Resize entlang einer Achse.
///
/// Die Achse ist die Richtung Zentrum → Handle. Symmetrisch geht der volle
/// projizierte Drag in den Halbmesser und das Zentrum bleibt; einseitig
/// teilen sich Halbmesser und Zentrum das Delta. `None` wenn Handle und
/// Zentrum zusammenfallen (Achse undefiniert).
pub(crate) fn resize_along_axis(
    globe: &dyn Globe,
    center: Location,
    half_extent: f64,
    handle: Location,
    delta: DVec3,
    one_sided: bool,
) -> Option<(f64, Location)> {
    let center_point = globe.compute_point_from_location(center);
    let handle_point = globe.compute_point_from_location(handle);
    let axis = (handle_point - center_point).normalize_or_zero();
    if axis == DVec3::ZERO {
        return None;
    }
    let projected = delta.dot(axis);
    if one_sided {
        let new_center = move_location(globe, center, axis * (projected / 2.0));
        Some((half_extent + projected / 2.0, new_center))
    } else {
        Some((half_extent + projected, center))
    }
}

/// Positioniert Vertex- und Rotations-Elemente für Umriss-Formen
/// (Polygon, Pfad).
///
/// `vertices` in flacher Index-Reihenfolge; der Rotations-Handle steht
/// nördlich des Zentrums im Abstand der mittleren Form-Ausdehnung.
pub(crate) fn update_outline_control_elements(
    globe: &dyn Globe,
    vertices: &[Location],
    control_points: &mut [ControlPoint],
    accessories: &mut [Accessory],
) {
    for control_point in control_points.iter_mut() {
        if control_point.purpose != ControlPurpose::Location {
            continue;
        }
        let Some(index) = control_point.index else {
            continue;
        };
        if let Some(location) = vertices.get(index) {
            control_point.set_location(*location);
        }
    }

    let Some(center) = center_of_locations(globe, vertices) else {
        log::warn!("Leere Boundary: Rotations-Handle bleibt unpositioniert");
        return;
    };
    let offset = ROTATION_HANDLE_OFFSET * average_distance(globe, center, vertices);
    let handle = great_circle::destination(center, 0.0, offset);
    for control_point in control_points.iter_mut() {
        if control_point.purpose == ControlPurpose::Rotation {
            control_point.set_location(handle);
        }
    }
    if let Some(accessory) = accessories.first_mut() {
        update_rotation_accessory(accessory, center, handle);
    }
}
