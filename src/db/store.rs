// src/db/store.rs
use super::connection::Database;
use super::{properties, zones};
use crate::domain::{Property, Zone, ZoneStore};
use crate::errors::ServerError;

/// The SQLite database seen through the engine's repository interface.
impl ZoneStore for Database {
    fn list_zones(&self) -> Result<Vec<Zone>, ServerError> {
        self.with_conn(|conn| zones::list_zones(conn))
    }

    fn properties_in_zone(&self, zone_id: i64) -> Result<Vec<Property>, ServerError> {
        self.with_conn(|conn| properties::properties_in_zone(conn, zone_id))
    }
}
