use std::sync::{Arc, Mutex};

use super::state::{AppStatePatch, AppStore};
use crate::store::Subscription;

/// Interaction widget: increments or decrements the counter and edits the
/// message, always writing only the field it touches.
///
/// Its message input mirrors the store: a subscription keeps the input text
/// equal to `state.message`, so edits made elsewhere show up here too. The
/// write is skipped when the input already matches, so a round trip through
/// the widget's own `set_message` does not clobber an in-progress edit.
pub struct ControlsWidget {
    store: AppStore,
    input: Arc<Mutex<String>>,
    _subscription: Subscription,
}

impl ControlsWidget {
    pub fn new(store: &AppStore) -> Self {
        let input = Arc::new(Mutex::new(String::new()));
        let input_clone = Arc::clone(&input);
        let subscription = store.subscribe(move |state| {
            let mut input = input_clone.lock().unwrap();
            if *input != state.message {
                *input = state.message.clone();
            }
        });
        Self {
            store: store.clone(),
            input,
            _subscription: subscription,
        }
    }

    pub fn increment(&self) {
        let count = self.store.get_state().count;
        self.store.set_state(AppStatePatch {
            count: Some(count + 1),
            ..Default::default()
        });
    }

    pub fn decrement(&self) {
        let count = self.store.get_state().count;
        self.store.set_state(AppStatePatch {
            count: Some(count - 1),
            ..Default::default()
        });
    }

    pub fn set_message(&self, message: &str) {
        self.store.set_state(AppStatePatch {
            message: Some(message.to_string()),
            ..Default::default()
        });
    }

    /// Current text of the mirrored message input.
    pub fn input(&self) -> String {
        self.input.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;

    #[test]
    fn increment_and_decrement_touch_only_count() {
        let store = AppStore::new(AppState::default());
        let controls = ControlsWidget::new(&store);

        controls.increment();
        controls.increment();
        assert_eq!(store.get_state().count, 2);
        assert_eq!(store.get_state().message, "Hello");

        controls.decrement();
        assert_eq!(store.get_state().count, 1);
    }

    #[test]
    fn set_message_touches_only_message() {
        let store = AppStore::new(AppState::default());
        let controls = ControlsWidget::new(&store);

        controls.increment();
        controls.set_message("World");
        assert_eq!(store.get_state().count, 1);
        assert_eq!(store.get_state().message, "World");
    }

    #[test]
    fn input_mirrors_store_message() {
        let store = AppStore::new(AppState::default());
        let controls = ControlsWidget::new(&store);
        assert_eq!(controls.input(), "Hello");

        // An edit made by some other consumer shows up in the input
        store.set_state(AppStatePatch {
            message: Some("elsewhere".to_string()),
            ..Default::default()
        });
        assert_eq!(controls.input(), "elsewhere");

        controls.set_message("typed");
        assert_eq!(controls.input(), "typed");
    }
}
