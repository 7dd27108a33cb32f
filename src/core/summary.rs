use super::{ answers::AnswerSet, schema::FieldSchema };

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub number: u8,
    pub title: &'static str,
    pub entries: Vec<SummaryEntry>,
}

/// Sections with at least one non-blank answer, each listing only its non-blank answers.
/// Values are kept exactly as saved.
pub fn summarize(schema: &FieldSchema, answers: &AnswerSet) -> Vec<SummarySection> {
    schema
        .sections()
        .iter()
        .filter_map(|section| {
            let entries: Vec<SummaryEntry> = section
                .fields
                .iter()
                .filter(|f| answers.is_filled(f.id))
                .map(|f| SummaryEntry {
                    id: f.id,
                    label: f.label,
                    value: answers.get(f.id).unwrap_or_default().to_string(),
                })
                .collect();

            if entries.is_empty() {
                None
            } else {
                Some(SummarySection { number: section.number, title: section.title, entries })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_sections_and_fields() {
        let schema = FieldSchema::technopolis();
        let mut answers = AnswerSet::empty_for(&schema);
        answers.set("theme", "Space");
        answers.set("themeRelevance", "   ");
        answers.set("iterationStrategy", "  quarterly  ");

        let summary = summarize(&schema, &answers);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].number, 2);
        assert_eq!(summary[0].title, "Substantive Anchor Points");
        assert_eq!(summary[0].entries.len(), 1);
        assert_eq!(summary[0].entries[0].label, "Central Theme");
        assert_eq!(summary[1].number, 9);
        assert_eq!(summary[1].entries[0].value, "  quarterly  ");
    }

    #[test]
    fn test_empty_answers_have_no_sections() {
        let schema = FieldSchema::technopolis();
        assert!(summarize(&schema, &AnswerSet::new()).is_empty());
    }
}
