use std::mem;

use super::{
    answers::AnswerSet,
    errors::WorksheetError,
    expansion::ExpansionState,
    export,
    schema::FieldSchema,
    store::{ ResponseStore, SavedSnapshot },
    validation::{ validate, ValidationResult },
};

pub const SAVED_MESSAGE: &str = "Your framework responses have been saved!";
pub const INCOMPLETE_MESSAGE: &str = "Please complete every field before saving.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

/// Side effects the presentation layer should carry out after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorksheetEvent {
    Notify(NoticeKind, String),
    ScrollToTop,
}

/// Owns the live answers, inline errors, section expansion and the saved snapshot
/// for one worksheet session.
#[derive(Debug)]
pub struct WorksheetController {
    schema: FieldSchema,
    answers: AnswerSet,
    errors: ValidationResult,
    expansion: ExpansionState,
    store: ResponseStore,
    // Inline errors follow edits only after the first save attempt.
    submitted: bool,
    events: Vec<WorksheetEvent>,
}

impl WorksheetController {
    pub fn new(schema: FieldSchema) -> Self {
        let answers = AnswerSet::empty_for(&schema);
        Self {
            schema,
            answers,
            errors: ValidationResult::default(),
            expansion: ExpansionState::default(),
            store: ResponseStore::default(),
            submitted: false,
            events: Vec::new(),
        }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn value(&self, id: &str) -> &str {
        self.answers.get(id).unwrap_or_default()
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.error(id)
    }

    pub fn set_field(&mut self, id: &str, value: impl Into<String>) -> Result<(), WorksheetError> {
        if !self.schema.contains(id) {
            return Err(WorksheetError::UnknownField(id.to_string()));
        }

        self.answers.set(id, value);

        if self.submitted {
            self.errors = validate(&self.schema, &self.answers);
        }

        Ok(())
    }

    pub fn toggle_section(&mut self, number: u8) {
        self.expansion.toggle(number);
    }

    pub fn is_expanded(&self, number: u8) -> bool {
        self.expansion.is_expanded(number)
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.schema);
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    /// Validates every field. Nothing is committed unless all of them pass.
    pub fn save(&mut self) -> Result<SavedSnapshot, ValidationResult> {
        self.submitted = true;
        let result = validate(&self.schema, &self.answers);

        if !result.is_valid() {
            tracing::warn!(
                errors = result.len(),
                fields = ?result.fields().collect::<Vec<_>>(),
                "Save rejected, required fields are empty"
            );
            for number in result.sections_with_errors(&self.schema) {
                self.expansion.expand(number);
            }
            self.errors = result.clone();
            self.events.push(WorksheetEvent::Notify(
                NoticeKind::Warning,
                INCOMPLETE_MESSAGE.to_string(),
            ));
            return Err(result);
        }

        let snapshot = SavedSnapshot::new(self.answers.clone());
        self.store.set(snapshot.clone());
        self.errors = result;

        tracing::info!(fields = snapshot.answers.filled_count(), "Saved framework responses");
        self.events.push(WorksheetEvent::Notify(NoticeKind::Success, SAVED_MESSAGE.to_string()));
        self.events.push(WorksheetEvent::ScrollToTop);

        Ok(snapshot)
    }

    pub fn saved(&self) -> Option<&SavedSnapshot> {
        self.store.get()
    }

    pub fn can_export(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn export(&self) -> Result<Vec<u8>, WorksheetError> {
        let snapshot = self.store.get().ok_or(WorksheetError::NothingToExport)?;
        export::export(&self.schema, snapshot)
    }

    /// Starts the form over as a fresh load would. The saved snapshot survives.
    pub fn reset(&mut self) {
        self.answers = AnswerSet::empty_for(&self.schema);
        self.errors = ValidationResult::default();
        self.expansion = ExpansionState::default();
        self.submitted = false;
    }

    pub fn drain_events(&mut self) -> Vec<WorksheetEvent> {
        mem::take(&mut self.events)
    }
}

impl Default for WorksheetController {
    fn default() -> Self {
        Self::new(FieldSchema::technopolis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_all(controller: &mut WorksheetController) {
        let ids: Vec<&'static str> = controller.schema().fields().map(|f| f.id).collect();
        for id in ids {
            controller.set_field(id, format!("value for {}", id)).unwrap();
        }
    }

    #[test]
    fn test_new_controller_state() {
        let controller = WorksheetController::default();
        assert_eq!(controller.answers().len(), 27);
        assert!(controller.errors().is_valid());
        assert!(controller.is_expanded(1));
        assert!(!controller.is_expanded(2));
        assert!(controller.saved().is_none());
        assert!(!controller.can_export());
    }

    #[test]
    fn test_set_field_unknown_rejected() {
        let mut controller = WorksheetController::default();
        assert!(matches!(
            controller.set_field("bogus", "x"),
            Err(WorksheetError::UnknownField(id)) if id == "bogus"
        ));
        assert!(controller.answers().get("bogus").is_none());
    }

    #[test]
    fn test_no_inline_errors_before_first_save() {
        let mut controller = WorksheetController::default();
        controller.set_field("theme", "Space").unwrap();
        controller.set_field("theme", "").unwrap();
        assert!(controller.error("theme").is_none());
    }

    #[test]
    fn test_inline_errors_follow_edits_after_failed_save() {
        let mut controller = WorksheetController::default();
        assert!(controller.save().is_err());
        assert_eq!(controller.error("theme"), Some("Please select a central theme"));

        controller.set_field("theme", "Space").unwrap();
        assert!(controller.error("theme").is_none());
        assert_eq!(controller.errors().len(), 26);

        controller.set_field("theme", "  ").unwrap();
        assert!(controller.error("theme").is_some());
    }

    #[test]
    fn test_failed_save_expands_sections_and_warns() {
        let mut controller = WorksheetController::default();
        let errors = controller.save().unwrap_err();
        assert_eq!(errors.len(), 27);
        assert_eq!(controller.expansion().expanded(), (1..=9).collect::<Vec<u8>>());
        assert_eq!(
            controller.drain_events(),
            vec![WorksheetEvent::Notify(NoticeKind::Warning, INCOMPLETE_MESSAGE.to_string())]
        );
        assert!(controller.saved().is_none());
    }

    #[test]
    fn test_successful_save_events_and_live_answers_kept() {
        let mut controller = WorksheetController::default();
        fill_all(&mut controller);

        let snapshot = controller.save().unwrap();
        assert_eq!(&snapshot.answers, controller.answers());
        assert_eq!(
            controller.drain_events(),
            vec![
                WorksheetEvent::Notify(NoticeKind::Success, SAVED_MESSAGE.to_string()),
                WorksheetEvent::ScrollToTop,
            ]
        );
        assert!(controller.drain_events().is_empty());
        assert_eq!(controller.value("theme"), "value for theme");
    }

    #[test]
    fn test_snapshot_not_synced_with_later_edits() {
        let mut controller = WorksheetController::default();
        fill_all(&mut controller);
        controller.save().unwrap();

        controller.set_field("theme", "changed").unwrap();
        assert_eq!(controller.saved().unwrap().answers.get("theme"), Some("value for theme"));
    }

    #[test]
    fn test_failed_save_keeps_previous_snapshot() {
        let mut controller = WorksheetController::default();
        fill_all(&mut controller);
        let first = controller.save().unwrap();

        controller.set_field("theme", "").unwrap();
        assert!(controller.save().is_err());
        assert_eq!(controller.saved(), Some(&first));
    }

    #[test]
    fn test_export_requires_snapshot() {
        let mut controller = WorksheetController::default();
        assert!(matches!(controller.export(), Err(WorksheetError::NothingToExport)));

        fill_all(&mut controller);
        controller.save().unwrap();
        assert!(controller.can_export());
        let parsed = export::parse(&controller.export().unwrap()).unwrap();
        assert_eq!(&parsed, controller.answers());
    }

    #[test]
    fn test_reset_keeps_snapshot() {
        let mut controller = WorksheetController::default();
        fill_all(&mut controller);
        controller.save().unwrap();
        controller.toggle_section(5);

        controller.reset();
        assert_eq!(controller.value("theme"), "");
        assert_eq!(controller.expansion(), &ExpansionState::default());
        assert!(controller.saved().is_some());

        controller.set_field("theme", "").unwrap();
        assert!(controller.error("theme").is_none());
    }
}
