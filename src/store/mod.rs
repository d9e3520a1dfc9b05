//! The observable state container.
//!
//! `StateStore` owns one state value and an ordered list of subscribers.
//! Writes are shallow merges; every write fans out synchronously to all
//! subscribers, in registration order, before the write call returns.

mod store;

pub use store::{StateStore, Subscription};
