pub mod core;
pub mod gui;
pub mod logging;
pub mod persistence;

pub use crate::core::{
    AnswerSet,
    ExpansionState,
    FieldSchema,
    ResponseStore,
    SavedSnapshot,
    ValidationResult,
    WorksheetController,
    WorksheetError,
};
