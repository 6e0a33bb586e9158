// src/db/properties.rs
use crate::domain::property::{NewProperty, Property};
use crate::errors::ServerError;
use crate::geos::GeoPoint;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

/// Properties of one zone in store order (ascending id).
pub fn properties_in_zone(conn: &Connection, zone_id: i64) -> Result<Vec<Property>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT
            id, zone_id, name, address, property_type, bedrooms, bathrooms,
            size_sqm, valuation_gbp, rent_per_month, rental_yield, description,
            lng, lat, updated_at
        FROM properties
        WHERE zone_id = ?1
        ORDER BY id
        "#,
    )?;

    let rows = stmt.query_map(params![zone_id], property_from_row)?;

    let mut properties = Vec::new();
    for property in rows {
        properties.push(property?);
    }
    Ok(properties)
}

/// Inserts a property for `zone_id`, deriving its rental yield.
pub fn insert_property(
    conn: &Connection,
    zone_id: i64,
    prop: &NewProperty,
    now: DateTime<Utc>,
) -> Result<i64, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        INSERT INTO properties (
            zone_id, name, address, property_type, bedrooms, bathrooms,
            size_sqm, valuation_gbp, rent_per_month, rental_yield, description,
            lng, lat, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?14)
        "#,
    )?;
    stmt.execute(params![
        zone_id,
        &prop.name,
        &prop.address,
        &prop.property_type,
        prop.bedrooms,
        prop.bathrooms,
        prop.size_sqm,
        prop.valuation_gbp,
        prop.rent_per_month,
        prop.rental_yield(),
        &prop.description,
        prop.location.lng,
        prop.location.lat,
        now,
    ])?;
    Ok(conn.last_insert_rowid())
}

/// Removes every property of a zone. Returns how many were deleted.
pub fn delete_properties_in_zone(conn: &Connection, zone_id: i64) -> Result<usize, ServerError> {
    let deleted = conn.execute("DELETE FROM properties WHERE zone_id = ?1", params![zone_id])?;
    Ok(deleted)
}

fn property_from_row(row: &Row) -> rusqlite::Result<Property> {
    Ok(Property {
        id: Some(row.get("id")?),
        zone_id: row.get("zone_id")?,
        name: row.get("name")?,
        address: row.get("address")?,
        property_type: row.get("property_type")?,
        bedrooms: row.get("bedrooms")?,
        bathrooms: row.get("bathrooms")?,
        size_sqm: row.get("size_sqm")?,
        valuation_gbp: row.get("valuation_gbp")?,
        rent_per_month: row.get("rent_per_month")?,
        rental_yield: row.get("rental_yield")?,
        description: row.get("description")?,
        location: GeoPoint {
            lat: row.get("lat")?,
            lng: row.get("lng")?,
        },
        updated_at: row.get("updated_at")?,
    })
}
