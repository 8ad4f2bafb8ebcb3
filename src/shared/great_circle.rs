//! Großkreis-Navigation: Azimut, Distanz und Zielpunkt.
//!
//! Distanzen sind Winkeldistanzen in Radiant (unabhängig vom Globus-Radius);
//! Azimut in Grad im Uhrzeigersinn ab Nord. Alle Funktionen geben neue
//! Werte zurück und mutieren nichts.

use crate::core::Location;

/// Azimut von `from` nach `to` in Grad [0, 360).
pub fn azimuth(from: Location, to: Location) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Winkeldistanz zwischen zwei Locations in Radiant (Haversine).
pub fn distance(from: Location, to: Location) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * a.sqrt().clamp(0.0, 1.0).asin()
}

/// Zielpunkt von `from` aus unter `azimuth_degrees` in `distance_radians`.
pub fn destination(from: Location, azimuth_degrees: f64, distance_radians: f64) -> Location {
    if distance_radians == 0.0 {
        return from;
    }
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let azimuth = azimuth_degrees.to_radians();

    let lat2 = (lat1.sin() * distance_radians.cos()
        + lat1.cos() * distance_radians.sin() * azimuth.cos())
    .clamp(-1.0, 1.0)
    .asin();
    let lon2 = lon1
        + (azimuth.sin() * distance_radians.sin() * lat1.cos())
            .atan2(distance_radians.cos() - lat1.sin() * lat2.sin());

    Location::new(
        lat2.to_degrees(),
        (lon2.to_degrees() + 180.0).rem_euclid(360.0) - 180.0,
    )
}
