//! whisperer-mapper — Field mapping engine for Data Whisperer.
//!
//! Pure crate, no I/O. Provides:
//!   - Field-name normalization and fuzzy similarity scoring
//!   - JSON flattening to dot-notation paths
//!   - Mapping suggestion between two field sets
//!   - Transform catalog and mapping execution

pub mod flatten;
pub mod normalize;
pub mod similarity;
pub mod suggest;
pub mod transform;

use serde::{Deserialize, Serialize};

pub use flatten::{extract_fields, flatten_json, set_nested};
pub use normalize::normalize_field_name;
pub use similarity::calculate_similarity;
pub use suggest::{suggest_mappings, DEFAULT_THRESHOLD};
pub use transform::{transform_data, Transform};

/// A suggested or user-edited association between a source field path and a
/// target field path, with an optional transform and a confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// Source field path, dot notation (`billing_address.city`).
    pub source: String,
    /// Target field path. Empty when no match was found.
    pub target: String,
    /// Optional transform applied during preview/export. An empty string in a
    /// request body normalizes to `None`.
    #[serde(default, deserialize_with = "transform::deserialize_opt")]
    pub transform: Option<Transform>,
    /// Similarity score in [0.0, 1.0]; 0.0 means no match.
    #[serde(default)]
    pub confidence: f64,
}

impl Mapping {
    /// True when both endpoints are set; only such mappings are executed or
    /// exported.
    pub fn is_complete(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty()
    }
}
