use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ecs::Vehicle;
use crate::locations::{Location, LocationRegistry};

/// A driver to add to the pool at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverSeed {
    pub id: i64,
    pub name: String,
    pub vehicle: Vehicle,
    /// Drivers start available unless the catalog says otherwise.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl DriverSeed {
    pub fn new(id: i64, name: impl Into<String>, vehicle: Vehicle) -> Self {
        Self {
            id,
            name: name.into(),
            vehicle,
            available: true,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// Startup catalog: the driver pool and the fixed set of locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub drivers: Vec<DriverSeed>,
    pub locations: Vec<Location>,
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self {
            drivers: vec![
                DriverSeed::new(101, "Rahul", Vehicle::new("KA 03 AB 1234", "Tata Tiago")),
                DriverSeed::new(102, "Kamala", Vehicle::new("KA 03 CD 5678", "Hyundai Santro")),
                DriverSeed::new(103, "Mani", Vehicle::new("KA 03 HL 6754", "Hyundai Santro")),
            ],
            locations: vec![
                Location::new("Brigade Road", 7),
                Location::new("MG Road", 2),
                Location::new("Outer Ring Road", 9),
                Location::new("Bellary Road", 11),
            ],
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {err}"),
            CatalogError::Json(err) => write!(f, "catalog is not valid JSON: {err}"),
            CatalogError::Invalid(message) => write!(f, "invalid catalog: {message}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}

impl SeedCatalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: SeedCatalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.locations.is_empty() {
            return Err(CatalogError::Invalid(
                "catalog must define at least one location".to_string(),
            ));
        }
        if let Some(index) = self
            .locations
            .iter()
            .position(|location| location.name().trim().is_empty())
        {
            return Err(CatalogError::Invalid(format!(
                "location {index} has an empty name"
            )));
        }
        if let Some(seed) = self
            .drivers
            .iter()
            .find(|seed| seed.name.trim().is_empty())
        {
            return Err(CatalogError::Invalid(format!(
                "driver {} has an empty name",
                seed.id
            )));
        }
        Ok(())
    }

    pub fn location_registry(&self) -> LocationRegistry {
        LocationRegistry::new(self.locations.clone())
    }
}
