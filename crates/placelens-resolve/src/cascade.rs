//! The ordered search tiers and their first-hit short-circuit.

use tokio_util::sync::CancellationToken;

use placelens_core::{BusinessGuess, Candidate, Coordinate, SearchStrategy, SearchTier};
use placelens_places::place_type_for_category;

use crate::providers::{PlaceSearch, ProviderError};

/// How one pass over the tier list ended.
#[derive(Debug)]
pub enum CascadeOutcome {
    /// A tier produced candidates. Later tiers were never attempted.
    Matched {
        tier_index: usize,
        strategy: SearchStrategy,
        candidates: Vec<Candidate>,
    },
    /// Every tier answered and every answer was empty.
    Empty { tiers_tried: usize },
    /// Every tier failed with a provider error, so nothing was searched.
    Failed {
        tiers_tried: usize,
        last_error: ProviderError,
    },
    /// The attempt was cancelled while tiers were still pending.
    Cancelled,
}

/// Runs the tiers in order and stops at the first one that returns any
/// candidate.
///
/// A tier that fails is logged and treated as empty so one flaky query
/// cannot sink the whole pass; the cascade as a whole only fails when
/// every tier did.
pub async fn run_cascade<P>(
    search: &P,
    tiers: &[SearchTier],
    center: Coordinate,
    guess: &BusinessGuess,
    cancel: &CancellationToken,
) -> CascadeOutcome
where
    P: PlaceSearch + ?Sized,
{
    let mut failures = 0usize;
    let mut last_error = None;

    for (tier_index, tier) in tiers.iter().enumerate() {
        if cancel.is_cancelled() {
            return CascadeOutcome::Cancelled;
        }

        let result = run_tier(search, tier, center, guess).await;
        if cancel.is_cancelled() {
            // The in-flight query lost the race with cancellation. Its
            // result must never become caller-visible.
            return CascadeOutcome::Cancelled;
        }

        match result {
            Ok(candidates) if !candidates.is_empty() => {
                tracing::info!(
                    tier = tier_index,
                    strategy = %tier.strategy,
                    hits = candidates.len(),
                    "search tier matched"
                );
                return CascadeOutcome::Matched {
                    tier_index,
                    strategy: tier.strategy,
                    candidates,
                };
            }
            Ok(_) => {
                tracing::debug!(tier = tier_index, strategy = %tier.strategy, "search tier empty");
            }
            Err(e) => {
                tracing::warn!(
                    tier = tier_index,
                    strategy = %tier.strategy,
                    error = %e,
                    "search tier failed, moving on to the next tier"
                );
                failures += 1;
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(last_error) if failures == tiers.len() => CascadeOutcome::Failed {
            tiers_tried: tiers.len(),
            last_error,
        },
        _ => CascadeOutcome::Empty {
            tiers_tried: tiers.len(),
        },
    }
}

async fn run_tier<P>(
    search: &P,
    tier: &SearchTier,
    center: Coordinate,
    guess: &BusinessGuess,
) -> Result<Vec<Candidate>, ProviderError>
where
    P: PlaceSearch + ?Sized,
{
    match tier.strategy {
        SearchStrategy::NearbyTyped => {
            let Some(radius_meters) = tier.radius_meters else {
                return Err(ProviderError(
                    "nearby tier has no radius configured".to_string(),
                ));
            };
            let place_type = place_type_for_category(&guess.category);
            search
                .search_nearby(center, radius_meters, &guess.name, place_type.as_deref())
                .await
        }
        SearchStrategy::NearbyGeneric => {
            let Some(radius_meters) = tier.radius_meters else {
                return Err(ProviderError(
                    "nearby tier has no radius configured".to_string(),
                ));
            };
            search
                .search_nearby(center, radius_meters, &guess.name, None)
                .await
        }
        SearchStrategy::TextWithBias => {
            search
                .search_text(&text_query(guess), Some(center), tier.radius_meters)
                .await
        }
    }
}

/// Query string for the free-text tier: business name and category, plus
/// any address text read off the photo itself.
fn text_query(guess: &BusinessGuess) -> String {
    let mut query = format!("{} {}", guess.name, guess.category);
    if let Some(location_text) = &guess.location_text {
        query.push(' ');
        query.push_str(location_text);
    }
    query
}
