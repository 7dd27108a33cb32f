use std::{ fs, path::Path };

use serde_json::{ Map, Value };

use super::{
    answers::AnswerSet,
    errors::WorksheetError,
    schema::FieldSchema,
    store::SavedSnapshot,
};

pub const DEFAULT_PRODUCT: &str = "technopolis";

/// `<product>-framework-responses.json`. Path separators and characters
/// rejected by common file systems become `-`.
pub fn file_name(product: &str) -> String {
    let product = product.trim();
    let product = if product.is_empty() { DEFAULT_PRODUCT } else { product };
    let product: String = product
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    format!("{}-framework-responses.json", product)
}

/// Pretty JSON object keyed by every schema field, in schema order.
/// Fields missing from the snapshot are written as empty strings.
pub fn export(schema: &FieldSchema, snapshot: &SavedSnapshot) -> Result<Vec<u8>, WorksheetError> {
    let document: Map<String, Value> = schema
        .fields()
        .map(|field| {
            let value = snapshot.answers.get(field.id).unwrap_or_default();
            (field.id.to_string(), Value::String(value.to_string()))
        })
        .collect();

    Ok(serde_json::to_vec_pretty(&Value::Object(document))?)
}

pub fn parse(bytes: &[u8]) -> Result<AnswerSet, WorksheetError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Object(document) = value else {
        return Err(WorksheetError::InvalidExport("expected a JSON object".to_string()));
    };

    document
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            other => Err(WorksheetError::InvalidExport(format!(
                "value of '{}' is not a string: {}",
                key, other
            ))),
        })
        .collect()
}

pub fn write_export(path: &Path, bytes: &[u8]) -> Result<(), WorksheetError> {
    fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Exported framework responses");
    Ok(())
}
