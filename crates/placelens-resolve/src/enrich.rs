//! Detail fetch and review digest for a chosen candidate.

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use placelens_core::{PlaceDetails, ReviewSummary};

use crate::error::Unresolved;
use crate::providers::{PlaceSearch, ReviewSummarizer};

/// Full record for one place: provider details plus the review digest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlace {
    pub details: PlaceDetails,
    pub summary: ReviewSummary,
}

/// Fetches details for one place and attaches a review summary.
///
/// A failed details fetch fails the enrichment. A failed or impossible
/// summarization never does: places without reviews are common, so the
/// digest degrades to the neutral placeholder and the match stays
/// useful. Both the pipeline winner and a caller-picked alternate come
/// through here, so the fallback semantics are identical for the two.
pub(crate) async fn enrich_place<P, S>(
    search: &P,
    summarizer: &S,
    provider_id: &str,
    category: &str,
    cancel: &CancellationToken,
) -> Result<EnrichedPlace, Unresolved>
where
    P: PlaceSearch + ?Sized,
    S: ReviewSummarizer + ?Sized,
{
    if cancel.is_cancelled() {
        return Err(Unresolved::Cancelled);
    }

    let fetched = search.fetch_details(provider_id).await;
    if cancel.is_cancelled() {
        return Err(Unresolved::Cancelled);
    }
    let details = fetched.map_err(|e| Unresolved::DetailsFetchFailed {
        provider_id: provider_id.to_string(),
        message: e.to_string(),
    })?;

    let summarized = if details.reviews.is_empty() {
        None
    } else {
        Some(
            summarizer
                .summarize(&details.name, category, &details.reviews)
                .await,
        )
    };
    if cancel.is_cancelled() {
        return Err(Unresolved::Cancelled);
    }

    let summary = match summarized {
        Some(Ok(summary)) => summary,
        Some(Err(e)) => {
            tracing::warn!(
                place = %details.name,
                error = %e,
                "review summarization failed, using the placeholder"
            );
            ReviewSummary::neutral_placeholder(&details.name)
        }
        None => {
            tracing::debug!(place = %details.name, "no reviews to summarize, using the placeholder");
            ReviewSummary::neutral_placeholder(&details.name)
        }
    };

    Ok(EnrichedPlace { details, summary })
}
