//! RoadInfo - road identification and Indian road-type lookup
//!
//! This library provides shared types and modules for the lookup client and
//! the government data proxy server.

pub mod classify;
pub mod config;
pub mod govdata;
pub mod location;
pub mod models;
pub mod nominatim;
pub mod pipeline;
pub mod server;

pub use classify::{classify, RoadFacts};
pub use models::{Address, GeoPoint, RoadCategory, RoadClassification};
