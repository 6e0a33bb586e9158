pub mod containment;
pub mod finance;
pub mod mock;
pub mod nearest;
pub mod property;
pub mod repository;
pub mod resolution;
pub mod zone;


pub use property::{NewProperty, Property};
pub use repository::ZoneStore;
pub use resolution::{resolve_property, Resolution, Source};
pub use zone::{NewZone, Zone, ZoneSummary};
