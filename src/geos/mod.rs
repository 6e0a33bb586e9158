mod distance;
mod geometry;
mod point;

pub use distance::haversine_meters;
pub use geometry::ZoneGeometry;
pub use point::GeoPoint;
