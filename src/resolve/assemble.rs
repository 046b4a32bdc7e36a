//! Final per-category ordering, filtering, and truncation.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{ContactResult, ScoredCandidate};

use super::ResolveConfig;

/// Deterministic total order: distance ascending with unknown last, then
/// priority descending, then original insertion order.
pub fn ordering(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    let by_distance = match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_distance
        .then(b.priority_score.cmp(&a.priority_score))
        .then(a.insertion_order.cmp(&b.insertion_order))
}

/// Merge, dedup, sort, and cap one category's scored candidates.
///
/// Eligible candidates are those the radius ladder admitted plus those with
/// no resolved coordinate (affinity-only). Known distances beyond
/// `max_distance_km` are dropped, except that a category is never silently
/// emptied: if the cutoff (or the ladder) removed everything, the single
/// closest known candidate within `fallback_ceiling_km` is retained.
pub fn assemble(
    scored: &[ScoredCandidate],
    cap: usize,
    config: &ResolveConfig,
) -> Vec<ContactResult> {
    let mut eligible: Vec<&ScoredCandidate> = scored
        .iter()
        .filter(|c| c.tier.is_some() || c.distance_km.is_none())
        .collect();
    eligible.sort_by(|a, b| ordering(a, b));

    let mut kept: Vec<&ScoredCandidate> = match config.max_distance_km {
        Some(max) => eligible
            .into_iter()
            .filter(|c| c.distance_km.map_or(true, |d| d <= max))
            .collect(),
        None => eligible,
    };

    if kept.is_empty() {
        let closest = scored
            .iter()
            .filter(|c| {
                c.distance_km
                    .map_or(false, |d| d <= config.fallback_ceiling_km)
            })
            .min_by(|a, b| ordering(a, b));
        if let Some(candidate) = closest {
            kept.push(candidate);
        }
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut results = Vec::new();
    for candidate in kept {
        if seen.insert(candidate.record.identity()) {
            results.push(ContactResult::from_candidate(candidate));
            if results.len() >= cap {
                break;
            }
        }
    }
    results
}
