use chrono::{ DateTime, Local };

use super::answers::AnswerSet;

/// Answers that passed validation, frozen at the moment they were saved.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSnapshot {
    pub answers: AnswerSet,
    pub saved_at: DateTime<Local>,
}

impl SavedSnapshot {
    pub fn new(answers: AnswerSet) -> Self {
        Self { answers, saved_at: Local::now() }
    }
}

/// Holds the most recent snapshot for the session. No history.
#[derive(Debug, Default)]
pub struct ResponseStore {
    snapshot: Option<SavedSnapshot>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, snapshot: SavedSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn get(&self) -> Option<&SavedSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_previous() {
        let mut store = ResponseStore::new();
        assert!(store.is_empty());

        store.set(SavedSnapshot::new([("a", "first"), ("b", "kept?")].into_iter().collect()));
        store.set(SavedSnapshot::new([("a", "second")].into_iter().collect()));

        let snapshot = store.get().unwrap();
        assert_eq!(snapshot.answers.get("a"), Some("second"));
        assert_eq!(snapshot.answers.get("b"), None);
    }
}
