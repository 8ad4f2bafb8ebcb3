//! Boundary einer Form: flache Punktfolge oder Ring-Liste (Polygon mit Löchern).

use super::Location;
use serde::{Deserialize, Serialize};

/// Begrenzung einer Form.
///
/// `Flat` ist eine offene Punktfolge (Pfad) oder ein einzelner Polygon-Ring,
/// `Ringed` eine Ring-Liste (äußerer Ring plus innere Löcher). Das
/// Schließ-Segment eines Rings (letzter → erster Vertex) ist implizit;
/// offene Pfade haben kein Schließ-Segment.
///
/// Vertices werden nach außen über einen flachen Index adressiert, bei dem
/// die Ringe in Reihenfolge hintereinander gezählt werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Boundary {
    /// Flache Punktfolge
    Flat(Vec<Location>),
    /// Ring-Liste: äußerer Ring + innere Ringe
    Ringed(Vec<Vec<Location>>),
}

impl Boundary {
    /// Gesamtzahl aller Vertices über alle Ringe.
    pub fn vertex_count(&self) -> usize {
        match self {
            Boundary::Flat(locations) => locations.len(),
            Boundary::Ringed(rings) => rings.iter().map(Vec::len).sum(),
        }
    }

    /// Hat die Boundary keinen einzigen Vertex?
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Strukturell unabhängige Kopie.
    ///
    /// Die Ring-/Flach-Unterscheidung bleibt erhalten; Mutation der Kopie
    /// darf das Original nicht beeinflussen und umgekehrt.
    pub fn deep_copy(&self) -> Boundary {
        self.clone()
    }

    /// Iterator über alle Vertices in flacher Index-Reihenfolge.
    pub fn locations(&self) -> Box<dyn Iterator<Item = &Location> + '_> {
        match self {
            Boundary::Flat(locations) => Box::new(locations.iter()),
            Boundary::Ringed(rings) => Box::new(rings.iter().flat_map(|ring| ring.iter())),
        }
    }

    /// Mutierender Iterator über alle Vertices in flacher Index-Reihenfolge.
    pub fn locations_mut(&mut self) -> Box<dyn Iterator<Item = &mut Location> + '_> {
        match self {
            Boundary::Flat(locations) => Box::new(locations.iter_mut()),
            Boundary::Ringed(rings) => Box::new(rings.iter_mut().flat_map(|ring| ring.iter_mut())),
        }
    }

    /// Vertex am flachen Index.
    pub fn location_at(&self, index: usize) -> Option<Location> {
        self.locations().nth(index).copied()
    }

    /// Überschreibt den Vertex am flachen Index.
    pub fn set_location_at(&mut self, index: usize, location: Location) -> bool {
        match self.locations_mut().nth(index) {
            Some(slot) => {
                *slot = location;
                true
            }
            None => false,
        }
    }

    /// Löst einen flachen Index in (Ring, lokaler Index) auf.
    pub fn resolve_index(&self, index: usize) -> Option<(usize, usize)> {
        match self {
            Boundary::Flat(locations) => (index < locations.len()).then_some((0, index)),
            Boundary::Ringed(rings) => {
                let mut remaining = index;
                for (ring_index, ring) in rings.iter().enumerate() {
                    if remaining < ring.len() {
                        return Some((ring_index, remaining));
                    }
                    remaining -= ring.len();
                }
                None
            }
        }
    }

    /// Anzahl der Ringe (eine flache Boundary zählt als ein Ring).
    pub fn ring_count(&self) -> usize {
        match self {
            Boundary::Flat(_) => 1,
            Boundary::Ringed(rings) => rings.len(),
        }
    }

    /// Vertices eines Rings.
    pub fn ring(&self, ring_index: usize) -> Option<&[Location]> {
        match self {
            Boundary::Flat(locations) => (ring_index == 0).then_some(&locations[..]),
            Boundary::Ringed(rings) => rings.get(ring_index).map(|ring| &ring[..]),
        }
    }

    /// Länge eines Rings.
    pub fn ring_len(&self, ring_index: usize) -> Option<usize> {
        self.ring(ring_index).map(<[Location]>::len)
    }

    /// Entfernt den Vertex am flachen Index.
    pub fn remove_location_at(&mut self, index: usize) -> Option<Location> {
        let (ring_index, local_index) = self.resolve_index(index)?;
        match self {
            Boundary::Flat(locations) => Some(locations.remove(local_index)),
            Boundary::Ringed(rings) => Some(rings[ring_index].remove(local_index)),
        }
    }

    /// Fügt einen Vertex an (Ring, lokaler Index) ein.
    /// `local_index == Ring-Länge` hängt an.
    pub fn insert_location(
        &mut self,
        ring_index: usize,
        local_index: usize,
        location: Location,
    ) -> bool {
        match self {
            Boundary::Flat(locations) => {
                if ring_index != 0 || local_index > locations.len() {
                    return false;
                }
                locations.insert(local_index, location);
                true
            }
            Boundary::Ringed(rings) => match rings.get_mut(ring_index) {
                Some(ring) if local_index <= ring.len() => {
                    ring.insert(local_index, location);
                    true
                }
                _ => false,
            },
        }
    }
}
