//! Geographische Basis-Typen: Location (Breite/Länge) und Position (+Höhe).

use serde::{Deserialize, Serialize};

/// Geographische Koordinate in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Breitengrad in Grad, positiv nach Norden
    pub latitude: f64,
    /// Längengrad in Grad, positiv nach Osten
    pub longitude: f64,
}

impl Location {
    /// Erstellt eine Location aus Breite/Länge in Grad.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Geographische Position: Location plus Höhe über dem Ellipsoid in Metern.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Breitengrad in Grad, positiv nach Norden
    pub latitude: f64,
    /// Längengrad in Grad, positiv nach Osten
    pub longitude: f64,
    /// Höhe über dem Ellipsoid in Metern
    pub altitude: f64,
}

impl Position {
    /// Erstellt eine Position aus Breite/Länge in Grad und Höhe in Metern.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Erstellt eine Position aus einer Location und einer Höhe.
    pub fn from_location(location: Location, altitude: f64) -> Self {
        Self::new(location.latitude, location.longitude, altitude)
    }

    /// Der Location-Anteil (ohne Höhe).
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

impl From<Location> for Position {
    fn from(location: Location) -> Self {
        Self::from_location(location, 0.0)
    }
}
