use super::{
    answers::AnswerSet,
    schema::{ FieldDef, FieldSchema },
};

/// Per-field error messages, in schema order. Empty means the answers can be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<(String, String)>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.iter().find(|(field, _)| field == id).map(|(_, msg)| msg.as_str())
    }

    pub fn has_error(&self, id: &str) -> bool {
        self.error(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(field, msg)| (field.as_str(), msg.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(field, _)| field.as_str())
    }

    pub fn errors_in_section(&self, schema: &FieldSchema, number: u8) -> usize {
        self.fields().filter(|id| schema.section_of(id) == Some(number)).count()
    }

    /// Ordinals of sections holding at least one error, ascending.
    pub fn sections_with_errors(&self, schema: &FieldSchema) -> Vec<u8> {
        schema
            .sections()
            .iter()
            .filter(|s| self.errors_in_section(schema, s.number) > 0)
            .map(|s| s.number)
            .collect()
    }
}

/// Inline check for a single field. `None` when the value is acceptable.
pub fn validate_field(field: &FieldDef, value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ if field.is_required() => Some(field.required_message.to_string()),
        _ => None,
    }
}

/// Checks every schema field. Keys in `answers` that the schema doesn't know are ignored.
pub fn validate(schema: &FieldSchema, answers: &AnswerSet) -> ValidationResult {
    let errors = schema
        .fields()
        .filter_map(|field| {
            validate_field(field, answers.get(field.id)).map(|msg| (field.id.to_string(), msg))
        })
        .collect();

    ValidationResult { errors }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_empty_reports_every_field() {
        let schema = FieldSchema::technopolis();
        let result = validate(&schema, &AnswerSet::empty_for(&schema));
        assert_eq!(result.len(), 27);
        assert_eq!(result.error("primaryAudience"), Some("Please identify your primary audience"));
        assert_eq!(result.sections_with_errors(&schema), (1..=9).collect::<Vec<u8>>());

        let order: Vec<&str> = result.fields().collect();
        let schema_order: Vec<&str> = schema.fields().map(|f| f.id).collect();
        assert_eq!(order, schema_order);
    }

    #[test]
    fn test_missing_keys_and_unknown_keys() {
        let schema = FieldSchema::technopolis();
        let mut answers = AnswerSet::new();
        answers.set("notAField", "value");
        answers.set("theme", "Space");

        let result = validate(&schema, &answers);
        assert_eq!(result.len(), 26);
        assert!(!result.has_error("theme"));
        assert!(!result.has_error("notAField"));
        assert_eq!(result.errors_in_section(&schema, 2), 2);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let schema = FieldSchema::technopolis();
        let field = schema.field("theme").unwrap();
        assert!(validate_field(field, Some("   \n ")).is_some());
        assert!(validate_field(field, None).is_some());
        assert!(validate_field(field, Some(" a ")).is_none());
    }

    proptest! {
        #[test]
        fn prop_error_iff_blank(values in proptest::collection::vec(
            prop_oneof![Just(None), "[ \\t\\n]{0,3}".prop_map(Some), "[ ]?[a-z]{1,8}[ ]?".prop_map(Some)],
            27,
        )) {
            let schema = FieldSchema::technopolis();
            let mut answers = AnswerSet::new();
            for (field, value) in schema.fields().zip(values.iter()) {
                if let Some(v) = value {
                    answers.set(field.id, v.clone());
                }
            }

            let result = validate(&schema, &answers);
            for (field, value) in schema.fields().zip(values.iter()) {
                let blank = value.as_deref().map_or(true, |v| v.trim().is_empty());
                prop_assert_eq!(result.has_error(field.id), blank);
            }
            prop_assert_eq!(result, validate(&schema, &answers));
        }
    }
}
