//! Content loading errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Errors that can occur while loading the embedded page content.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ContentError {
    /// Content document is not valid JSON or has the wrong shape
    #[error("Content parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// A field holds an invalid value
    #[error("Content validation error for {field}: {message}")]
    ValidationError {
        /// Dotted path of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// A list that must not be empty is empty
    #[error("Content list is empty: {field}")]
    Empty {
        /// Name of the empty list
        field: String,
    },
}

impl ContentError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Collapse validator output into the first failing field.
    ///
    /// Nested structs and lists are walked depth-first so the reported field
    /// reads like `projects[1].title`.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        first_failure(errors, String::new()).unwrap_or_else(|| Self::ValidationError {
            field: "<unknown>".to_string(),
            message: errors.to_string(),
        })
    }
}

fn first_failure(errors: &ValidationErrors, prefix: String) -> Option<ContentError> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    for (name, kind) in fields {
        let path = if prefix.is_empty() { name.to_string() } else { format!("{prefix}.{name}") };
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(first) = list.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    return Some(ContentError::ValidationError { field: path, message });
                }
            },
            ValidationErrorsKind::Struct(inner) => {
                if let Some(found) = first_failure(inner, path) {
                    return Some(found);
                }
            },
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    if let Some(found) = first_failure(inner, format!("{path}[{index}]")) {
                        return Some(found);
                    }
                }
            },
        }
    }
    None
}
