use std::sync::{Arc, Mutex};

use super::state::{AppState, AppStore};
use crate::store::Subscription;

/// Project the shared state into the content widget's display text.
///
/// Pure function, so the projection can be tested without any widget.
pub fn render(state: &AppState) -> String {
    format!("Count: {} | Message: {}", state.count, state.message)
}

/// Display widget: keeps a rendered projection of the store in sync.
///
/// On construction it subscribes to the store, so `output` immediately
/// reflects the state at construction time and tracks every later write
/// until [`detach`](Self::detach) is called.
pub struct ContentWidget {
    output: Arc<Mutex<String>>,
    subscription: Subscription,
}

impl ContentWidget {
    pub fn new(store: &AppStore) -> Self {
        let output = Arc::new(Mutex::new(String::new()));
        let output_clone = Arc::clone(&output);
        let subscription = store.subscribe(move |state| {
            *output_clone.lock().unwrap() = render(state);
        });
        Self {
            output,
            subscription,
        }
    }

    /// The most recently rendered projection.
    pub fn output(&self) -> String {
        self.output.lock().unwrap().clone()
    }

    /// Stop tracking the store; the last rendered output is kept.
    pub fn detach(&self) {
        self.subscription.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_projects_both_fields() {
        let state = AppState {
            count: 7,
            message: "World".to_string(),
        };
        assert_eq!(render(&state), "Count: 7 | Message: World");
    }

    #[test]
    fn widget_tracks_store() {
        use crate::app::AppStatePatch;

        let store = AppStore::new(AppState::default());
        let widget = ContentWidget::new(&store);
        assert_eq!(widget.output(), "Count: 0 | Message: Hello");

        store.set_state(AppStatePatch {
            count: Some(5),
            ..Default::default()
        });
        assert_eq!(widget.output(), "Count: 5 | Message: Hello");

        widget.detach();
        store.set_state(AppStatePatch {
            count: Some(6),
            ..Default::default()
        });
        assert_eq!(widget.output(), "Count: 5 | Message: Hello");
    }
}
