use serde::{Deserialize, Serialize};

/// Classification of a recoverable parse problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    UnknownProperty,
    UnsupportedInVersion,
    InvalidValue,
    UnknownElementType,
    UnknownActionType,
    MissingRequiredField,
    FallbackApplied,
    ElementDropped,
    FallbackDepthExceeded,
    SchemaVersionTooNew,
}

impl WarningCode {
    /// Error-severity codes mark a node that could not be built as written.
    pub fn is_error(self) -> bool {
        matches!(self, WarningCode::MissingRequiredField)
    }
}

/// Warning recorded while parsing a card. `path` locates the offending node,
/// e.g. `/body/0/items/1/color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub code: WarningCode,
    pub message: String,
    pub path: String,
}

impl ParseWarning {
    pub fn new(code: WarningCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.code.is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_code_in_snake_case() {
        let warning = ParseWarning::new(
            WarningCode::MissingRequiredField,
            "/body/0",
            "TextBlock requires `text`",
        );
        assert_eq!(
            serde_json::to_value(&warning).expect("serialize warning"),
            json!({
                "code": "missing_required_field",
                "message": "TextBlock requires `text`",
                "path": "/body/0"
            })
        );
        assert!(warning.is_error());
    }

    #[test]
    fn only_missing_fields_are_errors() {
        assert!(!WarningCode::UnknownProperty.is_error());
        assert!(!WarningCode::ElementDropped.is_error());
    }
}
