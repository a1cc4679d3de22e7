//! Fuzzy similarity between field names.
//!
//! Base score is the normalized Indel similarity over the normalized names,
//! boosted by containment and by a small synonym table for field-name
//! vocabulary that pure edit distance misses (id/uid, phone/tel, ...).

use rapidfuzz::distance::indel;

use crate::normalize::normalize_field_name;

/// Synonym families: a key plus alternates that should be treated as close
/// matches even when the spelling is far apart.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("id", &["identifier", "uid", "key", "code"]),
    ("name", &["title", "label", "display_name"]),
    ("email", &["e_mail", "mail", "email_address"]),
    ("phone", &["telephone", "tel", "phone_number", "mobile"]),
    ("address", &["addr", "location", "street"]),
    ("user", &["customer", "client", "contact"]),
    ("date", &["datetime", "timestamp", "time"]),
    ("created", &["create_date", "created_at", "creation_date"]),
    ("updated", &["update_date", "updated_at", "modification_date"]),
];

/// Similarity score between two field names, in [0.0, 1.0], rounded to two
/// decimal places. Exact match after normalization is 1.0.
pub fn calculate_similarity(source: &str, target: &str) -> f64 {
    let source_norm = normalize_field_name(source);
    let target_norm = normalize_field_name(target);

    if source_norm == target_norm {
        return 1.0;
    }

    let mut score = indel::normalized_similarity(source_norm.chars(), target_norm.chars());

    // One name containing the other is a strong signal (user_id / id).
    if source_norm.contains(&target_norm) || target_norm.contains(&source_norm) {
        score = score.max(0.85);
    }

    if has_synonym_match(&source_norm, &target_norm) {
        score = score.max(0.80);
    }

    (score * 100.0).round() / 100.0
}

fn has_synonym_match(source_norm: &str, target_norm: &str) -> bool {
    SYNONYMS.iter().any(|(key, alternates)| {
        let forward =
            source_norm.contains(key) && alternates.iter().any(|alt| target_norm.contains(alt));
        let backward =
            target_norm.contains(key) && alternates.iter().any(|alt| source_norm.contains(alt));
        forward || backward
    })
}
