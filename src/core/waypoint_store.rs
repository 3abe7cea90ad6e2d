//! Wegpunkt-Speicher einer Straßen-Session.

use super::Waypoint;
use glam::DVec3;
use std::collections::BTreeMap;

/// Geordnete Sicht auf den Speicher zum Zeitpunkt einer Regenerierung.
///
/// Start- und End-Heading werden immer frisch aus dem sortierten Speicher
/// abgeleitet und nie über Edits hinweg zwischengespeichert.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    /// Positionen in aufsteigender ID-Reihenfolge
    pub positions: Vec<DVec3>,
    /// Heading des Wegpunkts mit der kleinsten ID
    pub start_heading: f64,
    /// Heading des Wegpunkts mit der größten ID
    pub end_heading: f64,
}

impl StoreSnapshot {
    /// Position des ersten Wegpunkts (Pivot des Meshes).
    pub fn anchor(&self) -> DVec3 {
        self.positions.first().copied().unwrap_or(DVec3::ZERO)
    }
}

/// Alle Wegpunkte einer Session, indexiert nach ID.
///
/// Die Traversierung erfolgt in aufsteigender ID-Reihenfolge; da IDs extern
/// monoton vergeben werden, entspricht das der Platzierungsreihenfolge.
#[derive(Debug, Clone, Default)]
pub struct WaypointStore {
    waypoints: BTreeMap<u64, Waypoint>,
}

impl WaypointStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self {
            waypoints: BTreeMap::new(),
        }
    }

    /// Fügt einen Wegpunkt ein oder ersetzt einen bestehenden mit gleicher ID.
    ///
    /// Gibt `true` zurück, wenn die ID neu war.
    pub fn insert(&mut self, waypoint: Waypoint) -> bool {
        self.waypoints.insert(waypoint.id, waypoint).is_none()
    }

    /// Ersetzt Position und Heading eines bekannten Wegpunkts.
    pub fn update(&mut self, id: u64, position: DVec3, heading: f64) -> bool {
        let Some(waypoint) = self.waypoints.get_mut(&id) else {
            return false;
        };
        *waypoint = Waypoint::new(id, position, heading);
        true
    }

    /// Entfernt einen Wegpunkt.
    pub fn remove(&mut self, id: u64) -> Option<Waypoint> {
        self.waypoints.remove(&id)
    }

    /// Findet einen Wegpunkt per ID.
    pub fn get(&self, id: u64) -> Option<&Waypoint> {
        self.waypoints.get(&id)
    }

    /// Prüft ob eine ID bekannt ist.
    pub fn contains(&self, id: u64) -> bool {
        self.waypoints.contains_key(&id)
    }

    /// Gibt die Anzahl der Wegpunkte zurück
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Gibt `true` zurück, wenn keine Wegpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Entfernt alle Wegpunkte.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    /// Alle IDs in aufsteigender Reihenfolge.
    pub fn ids(&self) -> Vec<u64> {
        self.waypoints.keys().copied().collect()
    }

    /// Iterator in Platzierungsreihenfolge (aufsteigende ID).
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.values()
    }

    /// Wegpunkt mit der kleinsten ID.
    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.values().next()
    }

    /// Wegpunkt mit der größten ID.
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.values().next_back()
    }

    /// Erstellt eine sortierte Momentaufnahme für die Geometrie-Pipeline.
    ///
    /// `None` bei leerem Speicher.
    pub fn snapshot(&self) -> Option<StoreSnapshot> {
        let first = self.first()?;
        let last = self.last()?;
        Some(StoreSnapshot {
            positions: self.iter().map(|w| w.position).collect(),
            start_heading: first.heading,
            end_heading: last.heading,
        })
    }
}

#[cfg(test)]
mod tests;
