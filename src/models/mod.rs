//! Core data models for road lookups.

pub mod point;
pub mod proxy;
pub mod road;

pub use point::GeoPoint;
pub use proxy::{GovernmentRecord, ProxyRequest, ProxyResponse};
pub use road::{Address, RoadCategory, RoadClassification};
