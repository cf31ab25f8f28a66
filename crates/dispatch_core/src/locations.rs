//! Immutable catalog of named pickup/dropoff points.

use std::fmt;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// A named point with a static distance-to-center proxy (km).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    name: String,
    distance_from_center: u32,
}

impl Location {
    pub fn new(name: impl Into<String>, distance_from_center: u32) -> Self {
        Self {
            name: name.into(),
            distance_from_center,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance_from_center(&self) -> u32 {
        self.distance_from_center
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}km)", self.name, self.distance_from_center)
    }
}

/// Index into a [LocationRegistry].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub usize);

#[derive(Debug, Clone, Default, PartialEq, Eq, Resource)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, location)| (LocationId(index), location))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
