pub mod connection;
pub mod properties;
pub mod seed;
pub mod store;
pub mod zones;

pub use connection::{init_db, Database};
