//! Globus-Kontrakt: Transformation geographisch ↔ kartesisch.

use super::{Location, Position};
use glam::DVec3;

/// Kontrakt des Globus-Modells.
///
/// Implementierungen liefern die Transformation zwischen geographischen
/// Positionen und kartesischen Punkten im globuszentrierten System.
/// `compute_position_from_point` muss die Umkehrung von
/// `compute_point_from_position` sein (Roundtrip innerhalb Float-Toleranz).
pub trait Globe {
    /// Äquatorradius in Metern.
    fn equatorial_radius(&self) -> f64;

    /// Kartesischer Punkt zu einer geographischen Position.
    fn compute_point_from_position(&self, latitude: f64, longitude: f64, altitude: f64) -> DVec3;

    /// Geographische Position zu einem kartesischen Punkt.
    fn compute_position_from_point(&self, point: DVec3) -> Position;

    /// Kartesischer Punkt auf der Oberfläche (Höhe 0).
    fn compute_point_from_location(&self, location: Location) -> DVec3 {
        self.compute_point_from_position(location.latitude, location.longitude, 0.0)
    }
}

/// Kugelförmiger Referenz-Globus.
///
/// Achsen: x zeigt auf (0°, 0°), y auf (0°, 90° Ost), z zum Nordpol.
#[derive(Debug, Clone, Copy)]
pub struct SphericalGlobe {
    radius: f64,
}

impl SphericalGlobe {
    /// WGS84-Äquatorradius in Metern.
    pub const WGS84_EQUATORIAL_RADIUS: f64 = 6_378_137.0;

    /// Globus mit explizitem Radius in Metern.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for SphericalGlobe {
    fn default() -> Self {
        Self::new(Self::WGS84_EQUATORIAL_RADIUS)
    }
}

impl Globe for SphericalGlobe {
    fn equatorial_radius(&self) -> f64 {
        self.radius
    }

    fn compute_point_from_position(&self, latitude: f64, longitude: f64, altitude: f64) -> DVec3 {
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        let r = self.radius + altitude;
        DVec3::new(
            r * lat.cos() * lon.cos(),
            r * lat.cos() * lon.sin(),
            r * lat.sin(),
        )
    }

    fn compute_position_from_point(&self, point: DVec3) -> Position {
        let r = point.length();
        if r < f64::EPSILON {
            // Globus-Zentrum: Richtung undefiniert
            return Position::new(0.0, 0.0, -self.radius);
        }
        let latitude = (point.z / r).clamp(-1.0, 1.0).asin().to_degrees();
        let longitude = point.y.atan2(point.x).to_degrees();
        Position::new(latitude, longitude, r - self.radius)
    }
}
