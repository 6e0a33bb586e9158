// src/geos/geometry.rs
use super::GeoPoint;
use geo::line_intersection::line_intersection;
use geo::{Coord, Intersects, LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

/// A ring of `[lng, lat]` vertices; the first vertex repeats as the last.
pub type Ring = Vec<[f64; 2]>;

/// Zone outline in GeoJSON shape: `{ "type": "Polygon", "coordinates": [...] }`.
/// The first ring of each polygon is the outer boundary, any further rings are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum ZoneGeometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl ZoneGeometry {
    /// True when the point is inside a polygon or on its boundary.
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.to_multi_polygon().intersects(&point.to_geo())
    }

    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        let polygons = match self {
            ZoneGeometry::Polygon(rings) => vec![polygon_from_rings(rings)],
            ZoneGeometry::MultiPolygon(polys) => {
                polys.iter().map(|rings| polygon_from_rings(rings)).collect()
            }
        };
        MultiPolygon::new(polygons)
    }

    fn polygons(&self) -> Vec<&[Ring]> {
        match self {
            ZoneGeometry::Polygon(rings) => vec![rings.as_slice()],
            ZoneGeometry::MultiPolygon(polys) => polys.iter().map(Vec::as_slice).collect(),
        }
    }

    /// Checks the structural rules a seeded zone must satisfy: at least one
    /// polygon, every polygon with an outer ring, every ring closed with at
    /// least four vertices, every vertex on the globe, and no ring crossing
    /// itself.
    pub fn validate(&self) -> Result<(), String> {
        let polygons = self.polygons();
        if polygons.is_empty() {
            return Err("geometry has no polygons".into());
        }

        for (pi, rings) in polygons.iter().enumerate() {
            if rings.is_empty() {
                return Err(format!("polygon {pi} has no outer ring"));
            }
            for (ri, ring) in rings.iter().enumerate() {
                if ring.len() < 4 {
                    return Err(format!(
                        "polygon {pi} ring {ri} needs at least 4 vertices, has {}",
                        ring.len()
                    ));
                }
                if ring.first() != ring.last() {
                    return Err(format!("polygon {pi} ring {ri} is not closed"));
                }
                let invalid = ring.iter().find(|v| GeoPoint::new(v[1], v[0]).is_err());
                if let Some([lng, lat]) = invalid {
                    return Err(format!(
                        "polygon {pi} ring {ri} has an invalid vertex [{lng}, {lat}]"
                    ));
                }
                if ring_self_intersects(ring) {
                    return Err(format!("polygon {pi} ring {ri} is self-intersecting"));
                }
            }
        }
        Ok(())
    }
}

/// True when two edges of a closed ring meet anywhere other than the
/// vertex shared by neighbouring edges.
fn ring_self_intersects(ring: &[[f64; 2]]) -> bool {
    let edges: Vec<_> = ring_to_line_string(ring).lines().collect();
    let last = edges.len().saturating_sub(1);

    for i in 0..edges.len() {
        for j in (i + 2)..edges.len() {
            // First and last edges meet at the closing vertex.
            if i == 0 && j == last {
                continue;
            }
            if line_intersection(edges[i], edges[j]).is_some() {
                return true;
            }
        }
    }
    false
}

fn ring_to_line_string(ring: &[[f64; 2]]) -> LineString<f64> {
    LineString::new(ring.iter().map(|&[x, y]| Coord { x, y }).collect())
}

fn polygon_from_rings(rings: &[Ring]) -> Polygon<f64> {
    let mut rings = rings.iter().map(|ring| ring_to_line_string(ring));
    let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
    Polygon::new(exterior, rings.collect())
}
