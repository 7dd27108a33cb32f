pub mod answers;
pub mod controller;
pub mod errors;
pub mod expansion;
pub mod export;
pub mod schema;
pub mod store;
pub mod summary;
pub mod validation;

pub use answers::AnswerSet;
pub use controller::{ NoticeKind, WorksheetController, WorksheetEvent };
pub use errors::{ SchemaError, WorksheetError };
pub use expansion::ExpansionState;
pub use schema::{ FieldDef, FieldKind, FieldSchema, SectionDef };
pub use store::{ ResponseStore, SavedSnapshot };
pub use summary::{ summarize, SummaryEntry, SummarySection };
pub use validation::{ validate, validate_field, ValidationResult };
