//! # Tinstore
//!
//! A minimal observable state container for Rust.
//!
//! Tinstore holds one piece of typed application state and keeps any number
//! of independent consumers in sync with it:
//!
//! ## Store
//!
//! - `StateStore<S>` - Thread-safe container for a single state value
//! - Partial writes: `set_state` shallow-merges a patch into the current state
//! - Synchronous fan-out: every subscriber is notified, in registration
//!   order, before `set_state` returns
//! - `Subscription` - Per-registration cancellation handle
//!
//! ## Merge
//!
//! - `Merge` - Contract between a state record and its patch type: every
//!   declared field optional, unspecified fields carried over unchanged
//!
//! ## App
//!
//! A small demo built on the store: a counter-and-message state shared by a
//! display widget and a controls widget, each wired through dependency
//! injection rather than a global instance.

pub mod app;
pub mod merge;
pub mod store;

// Re-export main types for convenience
pub use merge::Merge;
pub use store::{StateStore, Subscription};
