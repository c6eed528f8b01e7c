//! The `resolve` command: photos in, place records out.
//!
//! Photos run concurrently through one shared resolver, bounded by the
//! configured concurrency. Per-image failures are rendered and counted
//! rather than propagated so one bad photo does not abort the batch.

use std::path::{Path, PathBuf};

use clap::Args;
use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

use placelens_core::{default_cascade, load_tiers, AppConfig, Coordinate};
use placelens_gemini::GeminiClient;
use placelens_places::PlacesClient;
use placelens_resolve::{ResolvedPlace, Resolver, Unresolved};

use crate::output;

/// Arguments for `placelens resolve`.
#[derive(Debug, Args)]
pub(crate) struct ResolveArgs {
    /// Photo files to resolve
    #[arg(required = true, value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// Device-reported latitude, used when a photo carries no GPS metadata
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Device-reported longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Emit one JSON line per image instead of human-readable text
    #[arg(long)]
    pub json: bool,

    /// List runner-up candidates for each resolved image
    #[arg(long)]
    pub alternates: bool,
}

pub(crate) enum ResolveOutcome {
    Resolved(Box<ResolvedPlace>),
    Unresolved(Unresolved),
    ReadFailed(std::io::Error),
}

type AppResolver = Resolver<GeminiClient, PlacesClient, GeminiClient>;

/// Resolves every image and renders one outcome per image.
///
/// # Errors
///
/// Returns an error when the configuration or device coordinate is
/// unusable, or when not a single image resolved, so the exit code tells
/// scripts whether anything matched.
pub(crate) async fn run_resolve(
    config: &AppConfig,
    args: ResolveArgs,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let device = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)?),
        _ => None,
    };

    let resolver = build_resolver(config)?;
    let max_concurrent = config.max_concurrent_resolutions.max(1);

    let mut outcomes = stream::iter(&args.images)
        .map(|path| {
            let resolver = &resolver;
            let cancel = &cancel;
            async move { (path, resolve_one(resolver, path, device, cancel).await) }
        })
        .buffer_unordered(max_concurrent);

    let mut resolved_count = 0usize;
    while let Some((path, outcome)) = outcomes.next().await {
        if matches!(outcome, ResolveOutcome::Resolved(_)) {
            resolved_count += 1;
        }
        print_outcome(path, &outcome, &args);
    }

    let total = args.images.len();
    if args.json {
        eprintln!("resolved {resolved_count} of {total} images");
    } else {
        println!("resolved {resolved_count} of {total} images");
    }

    if resolved_count == 0 {
        anyhow::bail!("no images resolved");
    }
    Ok(())
}

fn build_resolver(config: &AppConfig) -> anyhow::Result<AppResolver> {
    let places = PlacesClient::new(
        &config.places_api_key,
        config.request_timeout_secs,
        config.max_retries,
        config.retry_backoff_base_ms,
    )?;
    let gemini = GeminiClient::new(
        &config.gemini_api_key,
        &config.gemini_model,
        config.request_timeout_secs,
    )?;

    let tiers = match &config.tiers_path {
        Some(path) => {
            let tiers = load_tiers(path)?.tiers;
            tracing::info!(path = %path.display(), tiers = tiers.len(), "loaded search cascade override");
            tiers
        }
        None => default_cascade(),
    };

    Ok(Resolver::new(gemini.clone(), places, gemini, tiers))
}

async fn resolve_one(
    resolver: &AppResolver,
    path: &Path,
    device: Option<Coordinate>,
    cancel: &CancellationToken,
) -> ResolveOutcome {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => return ResolveOutcome::ReadFailed(e),
    };
    match resolver.resolve(&bytes, device, cancel).await {
        Ok(place) => ResolveOutcome::Resolved(Box::new(place)),
        Err(reason) => ResolveOutcome::Unresolved(reason),
    }
}

fn print_outcome(path: &Path, outcome: &ResolveOutcome, args: &ResolveArgs) {
    if args.json {
        let line = match outcome {
            ResolveOutcome::Resolved(place) => output::resolved_json(path, place),
            ResolveOutcome::Unresolved(reason) => output::unresolved_json(path, reason),
            ResolveOutcome::ReadFailed(error) => output::read_failed_json(path, error),
        };
        println!("{line}");
    } else {
        match outcome {
            ResolveOutcome::Resolved(place) => {
                print!("{}", output::render_resolved_text(path, place, args.alternates));
            }
            ResolveOutcome::Unresolved(reason) => {
                println!("{}", output::render_unresolved_text(path, reason));
            }
            ResolveOutcome::ReadFailed(error) => {
                eprintln!("error: could not read {}: {error}", path.display());
            }
        }
    }
}
