pub mod geo_repo;

pub use geo_repo::{GeoLevel, GeoRepository};
