//! Field-name normalization for comparison.

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());
static LOWER_TO_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-.\s]+").unwrap());
static NON_IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_]").unwrap());

/// Normalize a field name so differently-styled names compare equal:
/// camelCase becomes snake_case, separators collapse to underscores, and
/// anything outside `[a-z0-9_]` is dropped.
///
/// `normalize_field_name("customerID")` is `"customer_id"`.
pub fn normalize_field_name(field: &str) -> String {
    let field = CAMEL_BOUNDARY.replace_all(field, "${1}_${2}");
    let field = LOWER_TO_UPPER.replace_all(&field, "${1}_${2}");

    let field = field.to_lowercase();
    let field = SEPARATORS.replace_all(&field, "_");

    NON_IDENTIFIER.replace_all(&field, "").into_owned()
}
