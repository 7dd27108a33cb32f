use std::collections::BTreeSet;

use super::schema::FieldSchema;

/// Which sections are open. Starts with only the first section expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<u8>,
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self { expanded: BTreeSet::from([1]) }
    }
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, section: u8) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    pub fn is_expanded(&self, section: u8) -> bool {
        self.expanded.contains(&section)
    }

    pub fn expand(&mut self, section: u8) {
        self.expanded.insert(section);
    }

    pub fn expand_all(&mut self, schema: &FieldSchema) {
        self.expanded.extend(schema.sections().iter().map(|s| s.number));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded(&self) -> Vec<u8> {
        self.expanded.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_initial_state_only_first() {
        let state = ExpansionState::new();
        assert_eq!(state.expanded(), vec![1]);
        assert!((2..=9).all(|s| !state.is_expanded(s)));
    }

    #[test]
    fn test_toggle_second_twice_restores_initial() {
        let mut state = ExpansionState::new();
        state.toggle(2);
        assert!(state.is_expanded(2));
        state.toggle(2);
        assert_eq!(state, ExpansionState::new());
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let schema = FieldSchema::technopolis();
        let mut state = ExpansionState::new();
        state.expand_all(&schema);
        assert_eq!(state.expanded(), (1..=9).collect::<Vec<u8>>());
        state.collapse_all();
        assert!(state.expanded().is_empty());
        state.expand(4);
        assert_eq!(state.expanded(), vec![4]);
    }

    proptest! {
        #[test]
        fn prop_toggle_is_its_own_inverse(
            opened in proptest::collection::btree_set(1u8..=9, 0..9),
            section in 1u8..=9,
        ) {
            let mut state = ExpansionState::new();
            state.collapse_all();
            for s in &opened {
                state.expand(*s);
            }
            let before = state.clone();
            state.toggle(section);
            prop_assert_ne!(state.is_expanded(section), before.is_expanded(section));
            state.toggle(section);
            prop_assert_eq!(state, before);
        }
    }
}
