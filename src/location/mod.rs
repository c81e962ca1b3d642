//! One-shot location acquisition.
//!
//! A terminal has no platform geolocation API, so the position comes from a
//! pluggable [`LocationProvider`]: coordinates given on the command line, or
//! an IP geolocation service. Every fix is taken fresh; nothing is cached.

mod ip;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::GeoPoint;

pub use ip::{IpLocation, DEFAULT_IP_LOCATION_URL};

/// Default time allowed for a fix
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location access denied")]
    PermissionDenied,

    #[error("location request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn locate(&self) -> Result<GeoPoint, LocationError>;
}

/// Obtain one position from `provider`, failing with
/// [`LocationError::Timeout`] when it takes longer than `timeout`.
pub async fn acquire(
    provider: &dyn LocationProvider,
    timeout: Duration,
) -> Result<GeoPoint, LocationError> {
    debug!("Acquiring location via {}", provider.name());

    match tokio::time::timeout(timeout, provider.locate()).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Location provider {} timed out", provider.name());
            Err(LocationError::Timeout(timeout))
        }
    }
}

/// A position supplied up front (e.g. `--lat/--lon`)
pub struct FixedLocation {
    point: GeoPoint,
}

impl FixedLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            point: GeoPoint::new(lat, lon),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn locate(&self) -> Result<GeoPoint, LocationError> {
        if !self.point.is_valid() {
            return Err(LocationError::Unavailable(format!(
                "coordinates out of range: {}",
                self.point
            )));
        }
        Ok(self.point)
    }
}
