//! Shallow merge logic.
//!
//! Merge semantics:
//! - Top-level keys: overlay wins (last write wins)
//! - Nested values: REPLACE (an overlay object replaces the base object
//!   at that key wholesale, no recursion)

use crate::source::Mapping;

/// Shallow-merge `overlay` into `base`.
///
/// Every entry of `overlay` is inserted into `base`. On key collision the
/// overlay's whole value replaces the base's, even when both are objects.
/// Overwritten keys keep their original position in `base`; keys new to
/// `base` are appended in overlay order.
pub fn shallow_merge(mut base: Mapping, overlay: Mapping) -> Mapping {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}
