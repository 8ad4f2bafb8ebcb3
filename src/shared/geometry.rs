//! Reine kartesische Geometrie-Funktionen.

use glam::DVec3;
use std::f64::consts::TAU;

/// Projiziert `point` auf das Segment [p1, p2].
///
/// Liegt der Projektionsparameter außerhalb von [0, Segmentlänge], wird der
/// jeweilige Endpunkt zurückgegeben, sonst der Punkt entlang der normierten
/// Segment-Richtung im Abstand des Skalarprodukts.
pub fn nearest_point_on_segment(p1: DVec3, p2: DVec3, point: DVec3) -> DVec3 {
    let segment = p2 - p1;
    let length = segment.length();
    if length < f64::EPSILON {
        return p1;
    }
    let dir = segment / length;
    let dot = (point - p1).dot(dir);
    if dot < 0.0 {
        p1
    } else if dot > length {
        p2
    } else {
        p1 + dir * dot
    }
}

/// Addiert ein Heading-Delta und normalisiert das Ergebnis.
///
/// Die Summe wird in Radiant gebildet; nur bei |Summe| > 2π erfolgt eine
/// einzelne Modulo-Reduktion, negative Werte werden um 2π angehoben.
pub fn normalized_heading(current_heading: f64, delta_heading: f64) -> f64 {
    let mut heading = current_heading.to_radians() + delta_heading.to_radians();
    if heading.abs() > TAU {
        heading %= TAU;
    }
    let heading = if heading >= 0.0 { heading } else { heading + TAU };
    heading.to_degrees()
}
