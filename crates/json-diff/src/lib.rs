//! Structural JSON diff.
//!
//! Computes the ordered sequence of add/remove/replace operations (the
//! RFC 6902 subset modelled by `json-patch`) that transforms one JSON
//! value tree into another. The comparison is recursive and purely
//! structural:
//!
//! - objects are diffed by property set, recursing into shared names;
//! - arrays are diffed positionally (no move or insertion detection:
//!   growth appends via `-`, shrinkage removes trailing indices);
//! - a value whose kind changed is replaced wholesale, never recursed
//!   into;
//! - every emitted path is lowercased in a final normalization pass.
//!
//! Applying the emitted operations in order to the original tree yields
//! the modified tree.

mod compare;
mod diff;

pub use diff::{diff, diff_serializable};
