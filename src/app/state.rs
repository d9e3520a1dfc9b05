use crate::merge::Merge;
use crate::store::StateStore;

/// Shared state of the demo application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub count: i64,
    pub message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            count: 0,
            message: "Hello".to_string(),
        }
    }
}

/// Partial update for [`AppState`]: fields left as `None` are unchanged.
#[derive(Clone, Debug, Default)]
pub struct AppStatePatch {
    pub count: Option<i64>,
    pub message: Option<String>,
}

impl Merge for AppState {
    type Patch = AppStatePatch;

    fn merge(&mut self, patch: AppStatePatch) {
        if let Some(count) = patch.count {
            self.count = count;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
    }
}

/// The store type every demo widget is wired to.
pub type AppStore = StateStore<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = AppState::default();
        assert_eq!(state.count, 0);
        assert_eq!(state.message, "Hello");
    }

    #[test]
    fn merge_is_per_field() {
        let mut state = AppState::default();

        state.merge(AppStatePatch {
            count: Some(3),
            ..Default::default()
        });
        assert_eq!(state.count, 3);
        assert_eq!(state.message, "Hello");

        state.merge(AppStatePatch {
            message: Some("World".to_string()),
            ..Default::default()
        });
        assert_eq!(state.count, 3);
        assert_eq!(state.message, "World");
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut state = AppState {
            count: 9,
            message: "kept".to_string(),
        };
        let before = state.clone();
        state.merge(AppStatePatch::default());
        assert_eq!(state, before);
    }
}
