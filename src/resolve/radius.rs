//! Progressive radius admission.
//!
//! A small explicit state machine over the checkpoint ladder: walk the
//! ascending radii, admit every not-yet-admitted candidate inside the current
//! radius, and stop once enough candidates are in or the ladder is exhausted.
//! Candidates without a resolved coordinate are never admitted here; they
//! stay eligible downstream through affinity alone.

use tracing::debug;

use crate::models::ScoredCandidate;

/// Admit candidates tier by tier, tagging each with the checkpoint index that
/// first admitted it. Returns the admitted count.
pub fn progressive_admit(
    candidates: &mut [ScoredCandidate],
    steps_km: &[f64],
    min_results: usize,
) -> usize {
    let mut admitted = 0;

    for (tier, radius) in steps_km.iter().enumerate() {
        if admitted >= min_results {
            break;
        }

        let before = admitted;
        for candidate in candidates.iter_mut() {
            if candidate.tier.is_some() {
                continue;
            }
            match candidate.distance_km {
                Some(d) if d <= *radius => {
                    candidate.tier = Some(tier);
                    admitted += 1;
                }
                _ => {}
            }
        }

        if admitted > before {
            debug!(
                "radius {}km admitted {} candidate(s), {} total",
                radius,
                admitted - before,
                admitted
            );
        }
    }

    admitted
}
