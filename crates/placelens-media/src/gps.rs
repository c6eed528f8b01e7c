use std::io::Cursor;

use exif::{Exif, In, Rational, Reader, Tag, Value};
use placelens_core::{Coordinate, CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NorthSouth {
    North,
    South,
}

impl NorthSouth {
    fn from_ref(c: char) -> Option<Self> {
        match c {
            'N' => Some(NorthSouth::North),
            'S' => Some(NorthSouth::South),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EastWest {
    East,
    West,
}

impl EastWest {
    fn from_ref(c: char) -> Option<Self> {
        match c {
            'E' => Some(EastWest::East),
            'W' => Some(EastWest::West),
            _ => None,
        }
    }
}

/// A GPS fix as photo metadata stores it: unsigned decimal-degree
/// magnitudes plus hemisphere markers, not yet signed coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsFix {
    pub lat_magnitude: f64,
    pub lat_hemisphere: NorthSouth,
    pub lon_magnitude: f64,
    pub lon_hemisphere: EastWest,
}

impl GpsFix {
    /// Convert to a signed coordinate: south and west hemispheres negate
    /// their magnitudes, north and east keep them positive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCoordinate` when the signed values fall
    /// outside the valid latitude/longitude ranges.
    pub fn to_coordinate(&self) -> Result<Coordinate, CoreError> {
        let latitude = match self.lat_hemisphere {
            NorthSouth::North => self.lat_magnitude,
            NorthSouth::South => -self.lat_magnitude,
        };
        let longitude = match self.lon_hemisphere {
            EastWest::East => self.lon_magnitude,
            EastWest::West => -self.lon_magnitude,
        };
        Coordinate::new(latitude, longitude)
    }
}

/// Pull a GPS fix out of an image's embedded metadata.
///
/// Returns `None` for images with no metadata container, no GPS fields,
/// or GPS fields too malformed to trust. Malformed metadata is never an
/// error here; the capture simply has no photo-borne signal.
#[must_use]
pub fn extract_gps_fix(image_bytes: &[u8]) -> Option<GpsFix> {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(image_bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            tracing::debug!(error = %e, "image carries no readable metadata container");
            return None;
        }
    };

    let lat_magnitude = rational_field_degrees(&exif, Tag::GPSLatitude)?;
    let lon_magnitude = rational_field_degrees(&exif, Tag::GPSLongitude)?;
    let lat_hemisphere = NorthSouth::from_ref(ref_char(&exif, Tag::GPSLatitudeRef)?)?;
    let lon_hemisphere = EastWest::from_ref(ref_char(&exif, Tag::GPSLongitudeRef)?)?;

    Some(GpsFix {
        lat_magnitude,
        lat_hemisphere,
        lon_magnitude,
        lon_hemisphere,
    })
}

fn rational_field_degrees(exif: &Exif, tag: Tag) -> Option<f64> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Rational(parts) => dms_to_degrees(parts),
        _ => None,
    }
}

/// Degree/minute/second rationals to unsigned decimal degrees. Missing
/// trailing components count as zero; a zero denominator anywhere makes
/// the whole field unusable.
fn dms_to_degrees(parts: &[Rational]) -> Option<f64> {
    if parts.is_empty() {
        return None;
    }
    let mut degrees = 0.0;
    for (part, divisor) in parts.iter().zip([1.0, 60.0, 3600.0]) {
        if part.denom == 0 {
            return None;
        }
        degrees += part.to_f64() / divisor;
    }
    Some(degrees)
}

fn ref_char(exif: &Exif, tag: Tag) -> Option<char> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(chunks) => chunks
            .first()
            .and_then(|chunk| chunk.first())
            .map(|b| b.to_ascii_uppercase() as char),
        _ => None,
    }
}
