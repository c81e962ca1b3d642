//! Reverse geocoding against a Nominatim server.

mod client;

pub use client::{GeocodeError, ReverseGeocoder, ReversePlace, DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT};
