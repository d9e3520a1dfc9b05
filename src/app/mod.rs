//! Demo application built on the store.
//!
//! A counter-and-message state shared by two widgets: a content widget that
//! projects the state into rendered text, and a controls widget that issues
//! single-field patches. Each widget receives its store handle at
//! construction; nothing here is a global.

mod content;
mod controls;
mod state;

pub use content::ContentWidget;
pub use controls::ControlsWidget;
pub use state::{AppState, AppStatePatch, AppStore};
