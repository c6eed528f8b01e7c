//! Rendering of per-image outcomes, human text and JSON lines.
//!
//! Unresolved outcomes keep two voices apart: expected ones ("no
//! automatic match, pick the place manually") and upstream failures
//! ("something went wrong, try again").

use std::path::Path;

use placelens_resolve::{ResolvedPlace, Unresolved};

pub(crate) fn render_resolved_text(
    path: &Path,
    place: &ResolvedPlace,
    show_alternates: bool,
) -> String {
    use std::fmt::Write;

    let details = &place.details;
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", path.display(), details.name);
    if let Some(address) = &details.formatted_address {
        let _ = writeln!(out, "  address: {address}");
    }
    if let Some(rating) = details.rating {
        match details.rating_count {
            Some(count) => {
                let _ = writeln!(out, "  rating: {rating} ({count} ratings)");
            }
            None => {
                let _ = writeln!(out, "  rating: {rating}");
            }
        }
    }
    if let Some(phone) = &details.phone {
        let _ = writeln!(out, "  phone: {phone}");
    }
    if let Some(website) = &details.website {
        let _ = writeln!(out, "  website: {website}");
    }
    if let Some(open_now) = details.open_now {
        let _ = writeln!(out, "  open now: {}", if open_now { "yes" } else { "no" });
    }
    let _ = writeln!(
        out,
        "  match: tier {} ({}), signal {}",
        place.trace.tier_index + 1,
        place.trace.strategy,
        place.trace.signal_source
    );
    let _ = writeln!(
        out,
        "  summary ({}): {}",
        place.summary.sentiment, place.summary.text
    );
    if !place.summary.pros.is_empty() {
        let _ = writeln!(out, "  pros: {}", place.summary.pros.join("; "));
    }
    if !place.summary.cons.is_empty() {
        let _ = writeln!(out, "  cons: {}", place.summary.cons.join("; "));
    }
    if !place.summary.recommendations.is_empty() {
        let _ = writeln!(out, "  tips: {}", place.summary.recommendations.join("; "));
    }
    if show_alternates && !place.alternates.is_empty() {
        let _ = writeln!(out, "  alternates:");
        for (index, alternate) in place.alternates.iter().enumerate() {
            let mut line = format!("    {}. {}", index + 1, alternate.name);
            if let Some(rating) = alternate.rating {
                line.push_str(&format!(", {rating} stars"));
            }
            if let Some(address) = &alternate.formatted_address {
                line.push_str(&format!(", {address}"));
            }
            let _ = writeln!(out, "{line}");
        }
    }
    out
}

pub(crate) fn render_unresolved_text(path: &Path, reason: &Unresolved) -> String {
    if matches!(reason, Unresolved::Cancelled) {
        return format!("{}: cancelled", path.display());
    }
    if reason.needs_manual_fallback() {
        format!(
            "{}: no automatic match: {reason}. Pick the place manually.",
            path.display()
        )
    } else {
        format!(
            "{}: resolution failed: {reason}. Try again.",
            path.display()
        )
    }
}

pub(crate) fn resolved_json(path: &Path, place: &ResolvedPlace) -> serde_json::Value {
    serde_json::json!({
        "image": path.display().to_string(),
        "status": "resolved",
        "place": place,
    })
}

pub(crate) fn unresolved_json(path: &Path, reason: &Unresolved) -> serde_json::Value {
    serde_json::json!({
        "image": path.display().to_string(),
        "status": "unresolved",
        "reason": reason_slug(reason),
        "detail": reason.to_string(),
        "retryable": reason.is_retryable(),
        "manual_fallback": reason.needs_manual_fallback(),
    })
}

pub(crate) fn read_failed_json(path: &Path, error: &std::io::Error) -> serde_json::Value {
    serde_json::json!({
        "image": path.display().to_string(),
        "status": "read_failed",
        "detail": error.to_string(),
    })
}

fn reason_slug(reason: &Unresolved) -> &'static str {
    match reason {
        Unresolved::NoLocationSignal => "no_location_signal",
        Unresolved::ClassificationFailed { .. } => "classification_failed",
        Unresolved::SearchFailed { .. } => "search_failed",
        Unresolved::NoCandidatesFound { .. } => "no_candidates_found",
        Unresolved::DetailsFetchFailed { .. } => "details_fetch_failed",
        Unresolved::Cancelled => "cancelled",
    }
}
