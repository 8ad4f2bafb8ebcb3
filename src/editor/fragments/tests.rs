use super::common;
use super::{
    CircleFragment, EllipseFragment, PathFragment, PolygonFragment, RectangleFragment,
    ShapeEditorFragment,
};
use crate::core::{
    Boundary, Globe, Location, Position, Shape, ShapeAttributes, ShapeGeometry, SphericalGlobe,
};
use crate::editor::control_point::{ControlAttributes, ControlPoint, ControlPurpose};
use crate::shared::great_circle;
use approx::assert_relative_eq;

fn globe() -> SphericalGlobe {
    SphericalGlobe::default()
}

/// Quadrat-Ring um (0.5, 0.5), Kantenlänge 1 Grad.
fn square_ring() -> Vec<Location> {
    vec![
        Location::new(0.0, 0.0),
        Location::new(0.0, 1.0),
        Location::new(1.0, 1.0),
        Location::new(1.0, 0.0),
    ]
}

fn surface(latitude: f64, longitude: f64) -> Position {
    Position::new(latitude, longitude, 0.0)
}

/// Initialisiert und positioniert die Kontroll-Elemente eines Fragments.
fn control_elements(
    fragment: &dyn ShapeEditorFragment,
    shape: &Shape,
    globe: &dyn Globe,
) -> (Vec<ControlPoint>, Vec<crate::editor::control_point::Accessory>) {
    let attributes = ControlAttributes::default();
    let mut control_points = Vec::new();
    let mut accessories = Vec::new();
    fragment.initialize_control_elements(shape, &mut control_points, &mut accessories, &attributes);
    fragment.update_control_elements(shape, globe, &mut control_points, &mut accessories);
    (control_points, accessories)
}

// ─── Zentrum & mittlere Distanz ──────────────────────────────────────────────

#[test]
fn zentrum_eines_quadrats_ist_sein_schwerpunkt() {
    let globe = globe();
    let ring = square_ring();
    let center = common::center_of_locations(&globe, &ring).expect("Zentrum erwartet");
    assert_relative_eq!(center.latitude, 0.5, epsilon = 1e-2);
    assert_relative_eq!(center.longitude, 0.5, epsilon = 1e-2);
}

#[test]
fn innere_ringe_gehen_ins_zentrum_ein() {
    let globe = globe();
    let outer_only = Boundary::Ringed(vec![square_ring()]);
    let with_hole = Boundary::Ringed(vec![
        square_ring(),
        vec![
            Location::new(0.8, 0.8),
            Location::new(0.8, 0.9),
            Location::new(0.9, 0.9),
            Location::new(0.9, 0.8),
        ],
    ]);

    let center_outer =
        common::center_of_locations(&globe, outer_only.locations()).expect("Zentrum erwartet");
    let center_with_hole =
        common::center_of_locations(&globe, with_hole.locations()).expect("Zentrum erwartet");

    // Der innere Ring liegt nordöstlich und zieht das Zentrum dorthin
    assert!(center_with_hole.latitude > center_outer.latitude);
    assert!(center_with_hole.longitude > center_outer.longitude);
}

#[test]
fn leere_boundary_hat_kein_zentrum() {
    let globe = globe();
    let empty = Boundary::Flat(vec![]);
    assert!(common::center_of_locations(&globe, empty.locations()).is_none());
}

#[test]
fn mittlere_distanz_ohne_vertices_ist_null() {
    let globe = globe();
    let center = Location::new(0.0, 0.0);
    assert_eq!(common::average_distance(&globe, center, &[]), 0.0);
}

#[test]
fn mittlere_distanz_entspricht_der_winkeldistanz() {
    let globe = globe();
    let center = Location::new(0.0, 0.0);
    let point = Location::new(0.0, 1.0);
    let averaged = common::average_distance(&globe, center, &[point]);
    // Sehne statt Bogen: bei 1 Grad praktisch identisch
    assert_relative_eq!(
        averaged,
        great_circle::distance(center, point),
        max_relative = 1e-4
    );
}

// ─── Rotation ────────────────────────────────────────────────────────────────

#[test]
fn rotation_mit_identischen_positionen_ist_ein_noop() {
    let center = Location::new(0.0, 0.0);
    let mut ring = square_ring();
    let before = ring.clone();
    let hold = surface(0.3, 0.3);

    let delta = common::rotate_locations(center, hold, hold, ring.iter_mut());
    assert_eq!(delta, 0.0);
    assert_eq!(ring, before);
}

#[test]
fn rotation_erhaelt_die_distanz_zum_zentrum() {
    let center = Location::new(0.0, 0.0);
    let mut ring = vec![
        Location::new(0.5, 0.0),
        Location::new(0.0, 0.5),
        Location::new(-0.5, 0.0),
        Location::new(0.0, -0.5),
    ];
    let distances_before: Vec<f64> = ring
        .iter()
        .map(|location| great_circle::distance(center, *location))
        .collect();

    // Drag von Azimut 90 auf Azimut 135 → Delta 45 Grad
    let previous = surface(0.0, 1.0);
    let current = Position::from_location(great_circle::destination(center, 135.0, 0.0174), 0.0);
    let delta = common::rotate_locations(center, current, previous, ring.iter_mut());

    assert_relative_eq!(delta, 45.0, epsilon = 1e-6);
    for (location, before) in ring.iter().zip(&distances_before) {
        assert_relative_eq!(
            great_circle::distance(center, *location),
            *before,
            epsilon = 1e-9
        );
    }
}

// ─── Vertex-Einfügung ────────────────────────────────────────────────────────

#[test]
fn vertex_wird_nach_dem_ersten_kanten_endpunkt_eingefuegt() {
    let globe = globe();
    let mut boundary = Boundary::Flat(square_ring());

    // Nahe der Mitte der Kante 0 → 1 (Äquator-Kante)
    let picked = surface(0.02, 0.5);
    let insertion =
        common::insert_vertex_near(&globe, &mut boundary, picked, true).expect("Einfügung erwartet");

    assert_eq!(insertion.ring, 0);
    assert_eq!(insertion.index, 1);
    assert_eq!(boundary.vertex_count(), 5);
    let inserted = boundary.location_at(1).expect("Vertex erwartet");
    assert_relative_eq!(inserted.longitude, 0.5, epsilon = 1e-2);
    assert_relative_eq!(inserted.latitude, 0.0, epsilon = 1e-2);
}

#[test]
fn schliess_segment_haengt_den_vertex_an() {
    let globe = globe();
    let mut boundary = Boundary::Flat(square_ring());

    // Nahe der Mitte des Schließ-Segments 3 → 0 (Meridian-Kante)
    let picked = surface(0.5, -0.02);
    let insertion =
        common::insert_vertex_near(&globe, &mut boundary, picked, true).expect("Einfügung erwartet");

    assert_eq!(insertion.index, 4);
    assert_eq!(boundary.vertex_count(), 5);
    let appended = boundary.location_at(4).expect("Vertex erwartet");
    assert_relative_eq!(appended.latitude, 0.5, epsilon = 1e-2);
}

#[test]
fn offener_pfad_hat_kein_schliess_segment() {
    let globe = globe();
    let mut locations = vec![
        Location::new(0.0, 0.0),
        Location::new(0.0, 1.0),
        Location::new(0.0, 2.0),
    ];

    let index = common::insert_vertex_into_path(&globe, &mut locations, surface(0.02, 1.5))
        .expect("Einfügung erwartet");
    assert_eq!(index, 2);
    assert_eq!(locations.len(), 4);
}

// ─── Polygon-Fragment ────────────────────────────────────────────────────────

#[test]
fn polygon_vertex_drag_verschiebt_den_vertex() {
    let globe = globe();
    let fragment = PolygonFragment;
    let mut shape = Shape::simple_polygon(square_ring(), ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    let previous = control_points[0].position();
    let current = surface(-0.2, -0.1);
    fragment
        .reshape(&mut shape, &globe, &control_points[0], current, previous, false)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
        panic!("Polygon erwartet");
    };
    let moved = boundary.location_at(0).expect("Vertex erwartet");
    assert_relative_eq!(moved.latitude, -0.2, epsilon = 1e-3);
    assert_relative_eq!(moved.longitude, -0.1, epsilon = 1e-3);
}

#[test]
fn polygon_secondary_entfernt_vertex_bis_zur_mindestgroesse() {
    let globe = globe();
    let fragment = PolygonFragment;
    let mut shape = Shape::simple_polygon(square_ring(), ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    let hold = surface(0.0, 0.0);
    fragment
        .reshape(&mut shape, &globe, &control_points[1], hold, hold, true)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
        panic!("Polygon erwartet");
    };
    assert_eq!(boundary.vertex_count(), 3);

    // Ring an Mindestgröße: weiterer Versuch ändert nichts
    let (control_points, _) = control_elements(&fragment, &shape, &globe);
    fragment
        .reshape(&mut shape, &globe, &control_points[0], hold, hold, true)
        .expect("Reshape darf nicht fehlschlagen");
    let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
        panic!("Polygon erwartet");
    };
    assert_eq!(boundary.vertex_count(), 3);
}

#[test]
fn polygon_drag_verschiebt_alle_vertices() {
    let globe = globe();
    let fragment = PolygonFragment;
    let mut shape = Shape::simple_polygon(square_ring(), ShapeAttributes::default());

    let drag_point = ControlPoint::for_shape(
        ControlPurpose::Drag,
        ControlAttributes::default().location,
    );
    fragment
        .reshape(
            &mut shape,
            &globe,
            &drag_point,
            surface(0.0, 0.5),
            surface(0.0, 0.0),
            false,
        )
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
        panic!("Polygon erwartet");
    };
    let first = boundary.location_at(0).expect("Vertex erwartet");
    assert_relative_eq!(first.longitude, 0.5, epsilon = 1e-3);
}

#[test]
fn polygon_mit_loch_adressiert_vertices_ueber_ringe_hinweg() {
    let globe = globe();
    let fragment = PolygonFragment;
    let hole = vec![
        Location::new(0.3, 0.3),
        Location::new(0.3, 0.6),
        Location::new(0.6, 0.6),
        Location::new(0.6, 0.3),
    ];
    let mut shape = Shape::polygon(vec![square_ring(), hole], ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    // 8 Vertex-Handles + 1 Rotations-Handle
    assert_eq!(control_points.len(), 9);
    // Flacher Index 4 ist der erste Vertex des inneren Rings
    assert_relative_eq!(control_points[4].position().latitude, 0.3, epsilon = 1e-12);

    // Secondary auf Index 5 entfernt nur im inneren Ring
    let hold = surface(0.0, 0.0);
    fragment
        .reshape(&mut shape, &globe, &control_points[5], hold, hold, true)
        .expect("Reshape darf nicht fehlschlagen");
    let ShapeGeometry::Polygon { boundary } = &shape.geometry else {
        panic!("Polygon erwartet");
    };
    assert_eq!(boundary.ring_len(0), Some(4));
    assert_eq!(boundary.ring_len(1), Some(3));
}

#[test]
fn polygon_lehnt_fremden_zweck_ab() {
    let globe = globe();
    let fragment = PolygonFragment;
    let mut shape = Shape::simple_polygon(square_ring(), ShapeAttributes::default());
    let radius_point = ControlPoint::for_shape(
        ControlPurpose::Radius,
        ControlAttributes::default().resize,
    );

    let hold = surface(0.0, 0.0);
    let result = fragment.reshape(&mut shape, &globe, &radius_point, hold, hold, false);
    assert!(result.is_err(), "Radius-Zweck muss laut fehlschlagen");
}

#[test]
fn rotations_handle_steht_noerdlich_des_zentrums() {
    let globe = globe();
    let fragment = PolygonFragment;
    let shape = Shape::simple_polygon(square_ring(), ShapeAttributes::default());
    let (control_points, accessories) = control_elements(&fragment, &shape, &globe);

    let rotation = control_points
        .iter()
        .find(|control_point| control_point.purpose == ControlPurpose::Rotation)
        .expect("Rotations-Handle erwartet");
    assert!(rotation.placemark.visible);
    assert!(rotation.position().latitude > 0.5);

    let accessory = accessories.first().expect("Zubehör erwartet");
    assert_eq!(accessory.line.positions.len(), 2);
    assert_relative_eq!(
        accessory.line.positions[1].latitude,
        rotation.position().latitude,
        epsilon = 1e-12
    );
}

// ─── Pfad-Fragment ───────────────────────────────────────────────────────────

#[test]
fn pfad_behaelt_mindestens_zwei_vertices() {
    let globe = globe();
    let fragment = PathFragment;
    let mut shape = Shape::path(
        vec![
            Location::new(0.0, 0.0),
            Location::new(0.0, 1.0),
            Location::new(0.0, 2.0),
        ],
        ShapeAttributes::default(),
    );
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    let hold = surface(0.0, 0.0);
    fragment
        .reshape(&mut shape, &globe, &control_points[1], hold, hold, true)
        .expect("Reshape darf nicht fehlschlagen");
    fragment
        .reshape(&mut shape, &globe, &control_points[0], hold, hold, true)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Path { locations } = &shape.geometry else {
        panic!("Pfad erwartet");
    };
    assert_eq!(locations.len(), 2, "zweite Entfernung muss abgelehnt werden");
}

// ─── Kreis-Fragment ──────────────────────────────────────────────────────────

#[test]
fn kreis_radius_waechst_mit_drag_nach_aussen() {
    let globe = globe();
    let fragment = CircleFragment;
    let center = Location::new(0.0, 0.0);
    let mut shape = Shape::circle(center, 100_000.0, ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    let handle = &control_points[0];
    assert_eq!(handle.purpose, ControlPurpose::Radius);
    let previous = handle.position();
    let current = Position::from_location(
        great_circle::destination(center, 90.0, 101_000.0 / globe.equatorial_radius()),
        0.0,
    );

    fragment
        .reshape(&mut shape, &globe, handle, current, previous, false)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Circle { radius, .. } = &shape.geometry else {
        panic!("Kreis erwartet");
    };
    assert_relative_eq!(*radius, 101_000.0, max_relative = 1e-3);
}

#[test]
fn kreis_radius_bleibt_positiv() {
    let globe = globe();
    let fragment = CircleFragment;
    let center = Location::new(0.0, 0.0);
    let mut shape = Shape::circle(center, 50_000.0, ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    // Drag weit über das Zentrum hinaus nach Westen
    let previous = control_points[0].position();
    let current = Position::from_location(
        great_circle::destination(center, 270.0, 200_000.0 / globe.equatorial_radius()),
        0.0,
    );
    fragment
        .reshape(&mut shape, &globe, &control_points[0], current, previous, false)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Circle { radius, .. } = &shape.geometry else {
        panic!("Kreis erwartet");
    };
    assert_eq!(*radius, 50_000.0, "negativer Radius muss verworfen werden");
}

// ─── Ellipsen-Fragment ───────────────────────────────────────────────────────

#[test]
fn ellipsen_rotation_aktualisiert_das_heading() {
    let globe = globe();
    let fragment = EllipseFragment;
    let center = Location::new(10.0, 20.0);
    let mut shape = Shape::ellipse(center, 50_000.0, 30_000.0, 30.0, ShapeAttributes::default());

    let rotation_point = ControlPoint::for_shape(
        ControlPurpose::Rotation,
        ControlAttributes::default().rotate,
    );
    let previous = Position::from_location(great_circle::destination(center, 90.0, 0.01), 0.0);
    let current = Position::from_location(great_circle::destination(center, 120.0, 0.01), 0.0);

    fragment
        .reshape(&mut shape, &globe, &rotation_point, current, previous, false)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Ellipse { heading, .. } = &shape.geometry else {
        panic!("Ellipse erwartet");
    };
    assert_relative_eq!(*heading, 60.0, epsilon = 1e-6);
}

#[test]
fn ellipsen_handles_liegen_auf_den_achsen() {
    let globe = globe();
    let fragment = EllipseFragment;
    let center = Location::new(0.0, 0.0);
    let shape = Shape::ellipse(center, 50_000.0, 30_000.0, 0.0, ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    let width = control_points
        .iter()
        .find(|control_point| control_point.purpose == ControlPurpose::Width)
        .expect("Breiten-Handle erwartet");
    let height = control_points
        .iter()
        .find(|control_point| control_point.purpose == ControlPurpose::Height)
        .expect("Höhen-Handle erwartet");

    // Heading 0: Hauptachse nach Osten, Nebenachse nach Norden
    assert_relative_eq!(
        great_circle::azimuth(center, width.position().location()),
        90.0,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        great_circle::azimuth(center, height.position().location()),
        0.0,
        epsilon = 1e-6
    );
}

// ─── Rechteck-Fragment ───────────────────────────────────────────────────────

#[test]
fn rechteck_resize_symmetrisch_laesst_das_zentrum_stehen() {
    let globe = globe();
    let fragment = RectangleFragment;
    let center = Location::new(0.0, 0.0);
    let mut shape = Shape::rectangle(center, 2_000.0, 1_000.0, 0.0, ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    let width_handle = control_points
        .iter()
        .find(|control_point| control_point.purpose == ControlPurpose::Width)
        .expect("Breiten-Handle erwartet");
    let previous = width_handle.position();
    let current = Position::from_location(
        great_circle::destination(center, 90.0, 1_010.0 / globe.equatorial_radius()),
        0.0,
    );

    fragment
        .reshape(&mut shape, &globe, width_handle, current, previous, false)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Rectangle { width, center, .. } = &shape.geometry else {
        panic!("Rechteck erwartet");
    };
    assert_relative_eq!(*width, 2_020.0, max_relative = 1e-3);
    assert_relative_eq!(center.longitude, 0.0, epsilon = 1e-9);
}

#[test]
fn rechteck_resize_einseitig_verschiebt_das_zentrum() {
    let globe = globe();
    let fragment = RectangleFragment;
    let center = Location::new(0.0, 0.0);
    let mut shape = Shape::rectangle(center, 2_000.0, 1_000.0, 0.0, ShapeAttributes::default());
    let (control_points, _) = control_elements(&fragment, &shape, &globe);

    let width_handle = control_points
        .iter()
        .find(|control_point| control_point.purpose == ControlPurpose::Width)
        .expect("Breiten-Handle erwartet");
    let previous = width_handle.position();
    let current = Position::from_location(
        great_circle::destination(center, 90.0, 1_010.0 / globe.equatorial_radius()),
        0.0,
    );

    fragment
        .reshape(&mut shape, &globe, width_handle, current, previous, true)
        .expect("Reshape darf nicht fehlschlagen");

    let ShapeGeometry::Rectangle { width, center, .. } = &shape.geometry else {
        panic!("Rechteck erwartet");
    };
    assert_relative_eq!(*width, 2_010.0, max_relative = 1e-3);
    assert!(
        center.longitude > 0.0,
        "einseitiges Resize muss das Zentrum zur Drag-Seite ziehen"
    );
}

// ─── Schatten-Formen ─────────────────────────────────────────────────────────

#[test]
fn schatten_boundary_ist_nicht_mit_dem_original_verkoppelt() {
    let fragment = PolygonFragment;
    let mut original = Shape::simple_polygon(square_ring(), ShapeAttributes::default());
    let shadow = fragment.create_shadow_shape(&original);

    let ShapeGeometry::Polygon { boundary } = &mut original.geometry else {
        panic!("Polygon erwartet");
    };
    boundary.set_location_at(0, Location::new(9.0, 9.0));

    let ShapeGeometry::Polygon { boundary } = &shadow.geometry else {
        panic!("Polygon erwartet");
    };
    assert_eq!(
        boundary.location_at(0),
        Some(Location::new(0.0, 0.0)),
        "Schatten darf Mutation des Originals nicht sehen"
    );
}

#[test]
fn can_handle_ist_exklusiv_pro_form_art() {
    let shapes = [
        Shape::simple_polygon(square_ring(), ShapeAttributes::default()),
        Shape::path(square_ring(), ShapeAttributes::default()),
        Shape::circle(Location::new(0.0, 0.0), 1_000.0, ShapeAttributes::default()),
        Shape::ellipse(
            Location::new(0.0, 0.0),
            2_000.0,
            1_000.0,
            0.0,
            ShapeAttributes::default(),
        ),
        Shape::rectangle(
            Location::new(0.0, 0.0),
            2_000.0,
            1_000.0,
            0.0,
            ShapeAttributes::default(),
        ),
    ];
    let fragments: [&dyn ShapeEditorFragment; 5] = [
        &PolygonFragment,
        &PathFragment,
        &CircleFragment,
        &EllipseFragment,
        &RectangleFragment,
    ];

    for (shape_index, shape) in shapes.iter().enumerate() {
        for (fragment_index, fragment) in fragments.iter().enumerate() {
            assert_eq!(
                fragment.can_handle(shape),
                shape_index == fragment_index,
                "{} / {}",
                fragment.name(),
                shape.geometry.kind_name()
            );
        }
    }
}
