use thiserror::Error;

/// Fatal parse failure: the input is not a JSON object shaped like a card.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid card JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("card JSON must be an object")]
    NotAnObject,
    #[error("card is missing its `type` property")]
    MissingRootType,
    #[error("expected card type `AdaptiveCard`, found `{0}`")]
    UnexpectedRootType(String),
    #[error("invalid target schema version `{0}`")]
    InvalidTargetVersion(String),
}

/// Downcast of an element or action handle to a variant it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot view {actual} as {expected}")]
pub struct TypeMismatchError {
    pub expected: &'static str,
    pub actual: &'static str,
}

impl TypeMismatchError {
    pub fn new(expected: &'static str, actual: &'static str) -> Self {
        Self { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_type_mismatch() {
        let err = TypeMismatchError::new("Image", "TextBlock");
        assert_eq!(err.to_string(), "cannot view TextBlock as Image");
    }

    #[test]
    fn wraps_serde_errors() {
        let err: ParseError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ParseError::InvalidJson(_)));
        assert!(err.to_string().starts_with("invalid card JSON"));
    }

    #[test]
    fn formats_root_type_errors() {
        let err = ParseError::UnexpectedRootType("Container".into());
        assert_eq!(
            err.to_string(),
            "expected card type `AdaptiveCard`, found `Container`"
        );
    }
}
