// src/db/zones.rs
use crate::domain::zone::{NewZone, Zone, ZoneSummary};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

const ZONE_COLUMNS: &str = r#"
    id, name, slug, description, color,
    avg_valuation, median_rent, annual_transactions, primary_property_type,
    geometry, updated_at
"#;

/// All zones in store order (ascending id).
pub fn list_zones(conn: &Connection) -> Result<Vec<Zone>, ServerError> {
    let mut stmt = conn.prepare(&format!("SELECT {ZONE_COLUMNS} FROM zones ORDER BY id"))?;
    let rows = stmt.query_map([], zone_from_row)?;

    let mut zones = Vec::new();
    for zone in rows {
        zones.push(zone?);
    }
    Ok(zones)
}

pub fn get_zone_by_slug(conn: &Connection, slug: &str) -> Result<Option<Zone>, ServerError> {
    let mut stmt = conn.prepare(&format!("SELECT {ZONE_COLUMNS} FROM zones WHERE slug = ?1"))?;
    let mut rows = stmt.query_map(params![slug], zone_from_row)?;
    let zone = rows.next().transpose()?;
    Ok(zone)
}

/// Inserts the zone, or replaces everything but its id and creation time
/// when a zone with the same slug exists. Returns the zone id.
pub fn upsert_zone(
    conn: &Connection,
    zone: &NewZone,
    now: DateTime<Utc>,
) -> Result<i64, ServerError> {
    let geometry = serde_json::to_string(&zone.geometry)
        .map_err(|e| ServerError::DbError(format!("encode geometry failed: {e}")))?;

    conn.execute(
        r#"
        INSERT INTO zones (
            name, slug, description, color,
            avg_valuation, median_rent, annual_transactions, primary_property_type,
            geometry, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
        ON CONFLICT(slug) DO UPDATE SET
            name = excluded.name,
            description = excluded.description,
            color = excluded.color,
            avg_valuation = excluded.avg_valuation,
            median_rent = excluded.median_rent,
            annual_transactions = excluded.annual_transactions,
            primary_property_type = excluded.primary_property_type,
            geometry = excluded.geometry,
            updated_at = excluded.updated_at
        "#,
        params![
            &zone.name,
            &zone.slug,
            &zone.description,
            &zone.color,
            &zone.summary.avg_valuation,
            &zone.summary.median_rent,
            &zone.summary.annual_transactions,
            &zone.summary.primary_property_type,
            geometry,
            now,
        ],
    )?;

    get_zone_by_slug(conn, &zone.slug)?
        .map(|stored| stored.id)
        .ok_or_else(|| ServerError::DbError(format!("zone {} missing after upsert", zone.slug)))
}

fn zone_from_row(row: &Row) -> rusqlite::Result<Zone> {
    let geometry_json: String = row.get("geometry")?;
    let geometry = serde_json::from_str(&geometry_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;

    Ok(Zone {
        id: row.get("id")?,
        name: row.get("name")?,
        slug: row.get("slug")?,
        description: row.get("description")?,
        color: row.get("color")?,
        summary: ZoneSummary {
            avg_valuation: row.get("avg_valuation")?,
            median_rent: row.get("median_rent")?,
            annual_transactions: row.get("annual_transactions")?,
            primary_property_type: row.get("primary_property_type")?,
        },
        geometry,
        updated_at: row.get("updated_at")?,
    })
}
