//! Collision-free identifier generation.
//!
//! Identifiers are 36-character canonical UUIDs, time-ordered with random
//! entropy (v7). Uniqueness within a collection is guaranteed by retrying
//! against a caller-supplied `taken` predicate.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Canonical identifier layout: lowercase hex in 8-4-4-4-12 groups.
static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

/// Retry cap for the generate loop. The identifier space makes even one
/// collision rare; hitting the cap means the entropy source is broken.
const MAX_ATTEMPTS: u32 = 1_000_000;

/// Whether `candidate` matches the canonical identifier layout.
///
/// The lookup resolver uses this to decide between id and composite-name
/// resolution.
pub fn is_identifier(candidate: &str) -> bool {
    ID_PATTERN.is_match(candidate)
}

/// Generate an identifier for which `taken` returns false.
///
/// # Panics
///
/// Panics after `MAX_ATTEMPTS` consecutive collisions.
pub fn generate<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let candidate = Uuid::now_v7().to_string();
        if !taken(&candidate) {
            return candidate;
        }
    }
    panic!("identifier generation exceeded {MAX_ATTEMPTS} attempts");
}
