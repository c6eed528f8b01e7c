use placelens_core::{Coordinate, LocationSignal, SignalSource};

use crate::gps::extract_gps_fix;

/// Determine the location signal for a capture.
///
/// Photo metadata always wins when it yields a valid coordinate. When it
/// does not, the device-reported coordinate is used exactly as given; the
/// two sources are never blended. With neither available the capture has
/// no location signal.
#[must_use]
pub fn locate(image_bytes: &[u8], device: Option<Coordinate>) -> Option<LocationSignal> {
    if let Some(fix) = extract_gps_fix(image_bytes) {
        match fix.to_coordinate() {
            Ok(coordinate) => {
                tracing::debug!(coordinate = %coordinate, "using photo metadata location");
                return Some(LocationSignal {
                    coordinate,
                    source: SignalSource::PhotoMetadata,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "photo metadata location out of range; ignoring");
            }
        }
    }

    device.map(|coordinate| {
        tracing::debug!(coordinate = %coordinate, "falling back to device-reported location");
        LocationSignal {
            coordinate,
            source: SignalSource::DeviceReport,
        }
    })
}
