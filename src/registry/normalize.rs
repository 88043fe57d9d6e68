//! Set normalization for capability lists.

/// Sorts a capability list and drops duplicates in place.
pub fn sort_dedup(values: &mut Vec<String>) {
    values.sort();
    values.dedup();
}

/// Union of two capability lists, materialized sorted and deduplicated.
///
/// Commutative and idempotent: `merge(a, b) == merge(b, a)` and
/// `merge(&merge(a, b), b) == merge(a, b)`.
#[must_use]
pub fn merge(a: &[String], b: &[String]) -> Vec<String> {
    let mut out: Vec<String> = a.iter().chain(b).cloned().collect();
    sort_dedup(&mut out);
    out
}
