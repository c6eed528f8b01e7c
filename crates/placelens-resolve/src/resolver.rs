//! The orchestrator: one captured photo in, one resolved place (or a
//! typed unresolved outcome) out.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use placelens_core::{
    Candidate, Coordinate, PlaceDetails, ReviewSummary, SearchStrategy, SearchTier, SignalSource,
};
use placelens_media::locate;

use crate::cascade::{run_cascade, CascadeOutcome};
use crate::enrich::{enrich_place, EnrichedPlace};
use crate::error::Unresolved;
use crate::providers::{PlaceSearch, ReviewSummarizer, VisionClassifier};
use crate::select::select_candidates;

/// Terminal output of a successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlace {
    /// The winning candidate exactly as the matching tier returned it.
    pub candidate: Candidate,
    pub details: PlaceDetails,
    pub summary: ReviewSummary,
    /// Runners-up in provider order, at most five.
    pub alternates: Vec<Candidate>,
    pub trace: ResolutionTrace,
}

/// How the attempt reached its answer. Carried on the result for logging
/// and the machine-readable output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolutionTrace {
    pub attempt_id: Uuid,
    /// Where the coordinate came from, photo metadata or the device.
    pub signal_source: SignalSource,
    /// Zero-based index of the tier that matched.
    pub tier_index: usize,
    pub strategy: SearchStrategy,
    /// How many tiers were queried, including the one that matched.
    pub tiers_tried: usize,
}

/// Wires the collaborators and the tier table together.
///
/// The resolver itself holds no per-attempt state. Each
/// [`Resolver::resolve`] call is one independent attempt with its own id
/// and cancellation window, so a single resolver serves any number of
/// captures, sequentially or concurrently.
pub struct Resolver<C, P, S> {
    classifier: C,
    search: P,
    summarizer: S,
    tiers: Vec<SearchTier>,
}

impl<C, P, S> Resolver<C, P, S>
where
    C: VisionClassifier,
    P: PlaceSearch,
    S: ReviewSummarizer,
{
    pub fn new(classifier: C, search: P, summarizer: S, tiers: Vec<SearchTier>) -> Self {
        Self {
            classifier,
            search,
            summarizer,
            tiers,
        }
    }

    /// Resolves one captured photo to a place record.
    ///
    /// Phases run strictly in order: establish the location signal,
    /// classify the storefront, run the search cascade, enrich the
    /// winner. The token is honored before every phase and after every
    /// suspension point, so a cancelled attempt never reports a late
    /// result, not even one that was already in flight.
    ///
    /// # Errors
    ///
    /// Returns the [`Unresolved`] reason that ended the attempt.
    /// [`Unresolved::NoCandidatesFound`] is the expected "no automatic
    /// match" outcome rather than a malfunction; see
    /// [`Unresolved::needs_manual_fallback`].
    pub async fn resolve(
        &self,
        image_bytes: &[u8],
        device: Option<Coordinate>,
        cancel: &CancellationToken,
    ) -> Result<ResolvedPlace, Unresolved> {
        let attempt_id = Uuid::new_v4();
        if cancel.is_cancelled() {
            return Err(Unresolved::Cancelled);
        }

        let Some(signal) = locate(image_bytes, device) else {
            tracing::info!(attempt = %attempt_id, "no location signal, attempt over");
            return Err(Unresolved::NoLocationSignal);
        };
        tracing::debug!(
            attempt = %attempt_id,
            source = %signal.source,
            coordinate = %signal.coordinate,
            "location signal established"
        );

        if cancel.is_cancelled() {
            return Err(Unresolved::Cancelled);
        }
        let classified = self.classifier.classify(image_bytes, signal.coordinate).await;
        if cancel.is_cancelled() {
            return Err(Unresolved::Cancelled);
        }
        let guess = classified.map_err(|e| Unresolved::ClassificationFailed {
            message: e.to_string(),
        })?;
        tracing::info!(
            attempt = %attempt_id,
            name = %guess.name,
            category = %guess.category,
            "storefront classified"
        );

        match run_cascade(&self.search, &self.tiers, signal.coordinate, &guess, cancel).await {
            CascadeOutcome::Matched {
                tier_index,
                strategy,
                candidates,
            } => {
                let Some(selection) = select_candidates(candidates) else {
                    return Err(Unresolved::NoCandidatesFound {
                        tiers_tried: tier_index + 1,
                    });
                };
                let enriched = enrich_place(
                    &self.search,
                    &self.summarizer,
                    &selection.primary.provider_id,
                    &guess.category,
                    cancel,
                )
                .await?;
                tracing::info!(
                    attempt = %attempt_id,
                    place = %enriched.details.name,
                    tier = tier_index,
                    alternates = selection.alternates.len(),
                    "resolved"
                );
                Ok(ResolvedPlace {
                    candidate: selection.primary,
                    details: enriched.details,
                    summary: enriched.summary,
                    alternates: selection.alternates,
                    trace: ResolutionTrace {
                        attempt_id,
                        signal_source: signal.source,
                        tier_index,
                        strategy,
                        tiers_tried: tier_index + 1,
                    },
                })
            }
            CascadeOutcome::Empty { tiers_tried } => {
                tracing::info!(attempt = %attempt_id, tiers_tried, "no candidates from any tier");
                Err(Unresolved::NoCandidatesFound { tiers_tried })
            }
            CascadeOutcome::Failed {
                tiers_tried,
                last_error,
            } => Err(Unresolved::SearchFailed {
                tiers_tried,
                message: last_error.to_string(),
            }),
            CascadeOutcome::Cancelled => Err(Unresolved::Cancelled),
        }
    }

    /// Enriches one candidate outside the main pipeline.
    ///
    /// This is the path behind "show me an alternate instead": the
    /// caller picks a runner-up from an earlier resolution and gets the
    /// same details-plus-digest record the winner got, with identical
    /// placeholder semantics.
    ///
    /// # Errors
    ///
    /// [`Unresolved::DetailsFetchFailed`] when the detail record cannot
    /// be fetched, or [`Unresolved::Cancelled`].
    pub async fn enrich(
        &self,
        candidate: &Candidate,
        category: &str,
        cancel: &CancellationToken,
    ) -> Result<EnrichedPlace, Unresolved> {
        enrich_place(
            &self.search,
            &self.summarizer,
            &candidate.provider_id,
            category,
            cancel,
        )
        .await
    }
}
