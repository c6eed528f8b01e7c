//! Winner and alternates from the matching tier's candidate list.

use placelens_core::Candidate;

/// At most this many runners-up are kept alongside the winner.
pub const MAX_ALTERNATES: usize = 5;

/// The selected candidate plus its runners-up, in provider order.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub primary: Candidate,
    pub alternates: Vec<Candidate>,
}

/// Splits a candidate list into the selected place and its alternates.
///
/// The provider's relevance order is trusted: the first candidate wins,
/// the next [`MAX_ALTERNATES`] become alternates, and anything beyond
/// that is discarded. Pure and deterministic for a given input list.
#[must_use]
pub fn select_candidates(candidates: Vec<Candidate>) -> Option<Selection> {
    let mut remaining = candidates.into_iter();
    let primary = remaining.next()?;
    let alternates = remaining.take(MAX_ALTERNATES).collect();
    Some(Selection { primary, alternates })
}
