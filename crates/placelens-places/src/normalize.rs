//! Normalization from raw provider types to [`placelens_core::Candidate`]
//! and [`placelens_core::PlaceDetails`].
//!
//! Coordinate validation happens here: entries whose geometry falls outside
//! the valid latitude/longitude ranges are dropped rather than propagated.

use placelens_core::{Candidate, Coordinate, PlaceDetails, Review};

use crate::types::{PlaceDetailsResult, PlaceResult, ReviewResult};

/// Converts a raw search result into a [`Candidate`].
///
/// Returns `None` when the entry's geometry is out of range; callers skip
/// such entries so one bad record never fails a whole search response.
pub fn candidate_from_result(result: PlaceResult) -> Option<Candidate> {
    let coordinate =
        Coordinate::new(result.geometry.location.lat, result.geometry.location.lng).ok()?;

    Some(Candidate {
        provider_id: result.place_id,
        name: result.name,
        // Nearby search fills `vicinity`, text search `formatted_address`.
        formatted_address: result.formatted_address.or(result.vicinity),
        coordinate,
        rating: result.rating,
        rating_count: result.user_ratings_total,
    })
}

/// Converts a raw details result into a [`PlaceDetails`].
///
/// Returns `None` when the record's geometry is out of range.
pub fn details_from_result(result: PlaceDetailsResult) -> Option<PlaceDetails> {
    let coordinate =
        Coordinate::new(result.geometry.location.lat, result.geometry.location.lng).ok()?;

    let (open_now, opening_hours) = match result.opening_hours {
        Some(hours) => (hours.open_now, hours.weekday_text),
        None => (None, Vec::new()),
    };

    Some(PlaceDetails {
        provider_id: result.place_id,
        name: result.name,
        formatted_address: result.formatted_address,
        coordinate,
        rating: result.rating,
        rating_count: result.user_ratings_total,
        phone: result.formatted_phone_number,
        website: result.website,
        opening_hours,
        open_now,
        reviews: result.reviews.into_iter().map(review_from_result).collect(),
    })
}

fn review_from_result(review: ReviewResult) -> Review {
    Review {
        author: review.author_name,
        rating: review.rating,
        text: review.text,
        relative_time: review.relative_time_description,
    }
}
