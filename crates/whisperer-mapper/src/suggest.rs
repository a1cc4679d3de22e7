//! Mapping suggestion between a source and a target field set.

use std::collections::BTreeSet;

use tracing::debug;

use crate::similarity::calculate_similarity;
use crate::Mapping;

/// Minimum similarity for a suggestion when no threshold is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Suggest one-to-one mappings from source fields to target fields.
///
/// Each source field takes its best-scoring unused target at or above the
/// threshold; a source with no candidate gets an empty target and zero
/// confidence so the user can assign it by hand. The result is sorted by
/// confidence, highest first.
pub fn suggest_mappings(
    source_fields: &[String],
    target_fields: &[String],
    threshold: f64,
) -> Vec<Mapping> {
    let mut mappings = Vec::with_capacity(source_fields.len());
    let mut used_targets: BTreeSet<&str> = BTreeSet::new();

    for source in source_fields {
        let mut best: Option<(&str, f64)> = None;

        for target in target_fields {
            if used_targets.contains(target.as_str()) {
                continue;
            }
            let score = calculate_similarity(source, target);
            if score >= threshold && best.map_or(true, |(_, s)| score > s) {
                best = Some((target, score));
            }
        }

        match best {
            Some((target, score)) => {
                used_targets.insert(target);
                mappings.push(Mapping {
                    source: source.clone(),
                    target: target.to_string(),
                    transform: None,
                    confidence: score,
                });
            }
            None => {
                debug!(field = %source, "no target candidate above threshold");
                mappings.push(Mapping {
                    source: source.clone(),
                    target: String::new(),
                    transform: None,
                    confidence: 0.0,
                });
            }
        }
    }

    // Stable sort keeps source order among equal scores.
    mappings.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    mappings
}
