// src/domain/repository.rs
use super::containment;
use super::property::Property;
use super::zone::Zone;
use crate::errors::ServerError;
use crate::geos::GeoPoint;

/// Read access the resolution engine needs from a data store.
///
/// Implementations return zones in ascending id order and a zone's
/// properties in ascending id order; that order breaks ties.
pub trait ZoneStore {
    fn list_zones(&self) -> Result<Vec<Zone>, ServerError>;

    fn properties_in_zone(&self, zone_id: i64) -> Result<Vec<Property>, ServerError>;

    fn find_zone_containing(&self, point: GeoPoint) -> Result<Option<Zone>, ServerError> {
        let zones = self.list_zones()?;
        Ok(containment::resolve_zone(point, &zones).cloned())
    }
}

/// Fixed in-memory data, for exercising the engine without SQLite.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub zones: Vec<Zone>,
    pub properties: Vec<Property>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new(zones: Vec<Zone>, properties: Vec<Property>) -> Self {
        Self { zones, properties }
    }
}

#[cfg(test)]
impl ZoneStore for MemoryStore {
    fn list_zones(&self) -> Result<Vec<Zone>, ServerError> {
        Ok(self.zones.clone())
    }

    fn properties_in_zone(&self, zone_id: i64) -> Result<Vec<Property>, ServerError> {
        Ok(self
            .properties
            .iter()
            .filter(|p| p.zone_id == zone_id)
            .cloned()
            .collect())
    }
}
