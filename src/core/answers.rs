use std::collections::BTreeMap;

use serde::{ Deserialize, Serialize };

use super::schema::FieldSchema;

/// Field id -> current text, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty value per schema field.
    pub fn empty_for(schema: &FieldSchema) -> Self {
        Self {
            values: schema.fields().map(|f| (f.id.to_string(), String::new())).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// True when the value exists and is not blank after trimming.
    pub fn is_filled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|v| !v.trim().is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.values.values().filter(|v| !v.trim().is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_for_schema() {
        let schema = FieldSchema::technopolis();
        let answers = AnswerSet::empty_for(&schema);
        assert_eq!(answers.len(), 27);
        assert_eq!(answers.get("theme"), Some(""));
        assert_eq!(answers.filled_count(), 0);
    }

    #[test]
    fn test_is_filled_trims() {
        let mut answers = AnswerSet::new();
        answers.set("a", "  \n\t ");
        answers.set("b", " x ");
        assert!(!answers.is_filled("a"));
        assert!(answers.is_filled("b"));
        assert!(!answers.is_filled("missing"));
        assert_eq!(answers.get("b"), Some(" x "));
    }
}
