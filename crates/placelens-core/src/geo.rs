use serde::Serialize;

use crate::CoreError;

/// A point on the globe in signed decimal degrees.
///
/// Fields are private so every value in the system went through range
/// validation. Positive latitude is north, positive longitude is east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Construct a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCoordinate` when latitude is outside
    /// [-90, 90] or longitude is outside [-180, 180] (non-finite values
    /// fail the range check as well).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinate {
    /// Renders as `lat,lng`, the form the place provider expects in its
    /// `location` query parameter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Where a location signal came from.
///
/// The search tiers behave identically for both, but the provenance is
/// kept on the resolution trace for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    /// Extracted from the photo's embedded metadata.
    PhotoMetadata,
    /// Reported by the capturing device at shutter time.
    DeviceReport,
}

impl std::fmt::Display for SignalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalSource::PhotoMetadata => write!(f, "photo_metadata"),
            SignalSource::DeviceReport => write!(f, "device_report"),
        }
    }
}

/// A usable location for a capture, with its provenance.
///
/// Absence of any signal is represented by `Option::None` at the call
/// sites, never by a sentinel coordinate such as `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationSignal {
    pub coordinate: Coordinate,
    pub source: SignalSource,
}
