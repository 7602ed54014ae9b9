//! Maps `validator` failures to `AppError`.
//!
//! The `IntoResponse` mapping of `AppError` itself lives with the error
//! type in `banca-core`.

use serde::Serialize;
use validator::ValidationErrors;

use banca_core::error::AppError;

use crate::dto::request::json_field_name;

/// A field-level validation failure reported in the error details.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Offending field by its JSON name, dotted for nested values.
    pub field: String,
    /// Validator code (`length`, `range`, ...).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Build a `Validation` error listing every failed field.
pub fn validation_error(errors: &ValidationErrors) -> AppError {
    let mut fields = Vec::new();
    collect_field_errors("", errors, &mut fields);
    fields.sort_by(|a, b| a.field.cmp(&b.field));

    let summary = fields
        .iter()
        .map(|f| f.field.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let details = serde_json::to_value(&fields).unwrap_or_default();

    AppError::validation(format!("Invalid fields: {summary}")).with_details(details)
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let field = json_field_name(field);
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    out.push(FieldError {
                        field: path.clone(),
                        code: error.code.to_string(),
                        message: error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field '{path}'")),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
