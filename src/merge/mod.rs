//! Shallow partial updates for state records.
//!
//! A state type declares a companion patch type in which every field is
//! optional; merging a patch overwrites exactly the fields it carries and
//! leaves the rest untouched.

mod merge;

pub use merge::Merge;
