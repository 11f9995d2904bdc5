use serde_json::Value;

use crate::action::{ActionKind, ActionProps};
use crate::property_bag::{PropertyBag, ToCardJson, canonicalize};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

/// Submits the card's inputs together with arbitrary `data`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitAction {
    pub props: ActionProps,
    /// `Value::Null` when unset.
    pub data: Value,
}

impl SubmitAction {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            props: ActionProps::read(reader),
            data: reader
                .value("data", SchemaVersion::V1_0)
                .map(canonicalize)
                .unwrap_or(Value::Null),
        })
    }

    /// `data` as compact JSON text; empty when unset.
    pub fn data_json(&self) -> String {
        if self.data.is_null() {
            String::new()
        } else {
            self.data.to_string()
        }
    }

    /// Replaces `data` from JSON text, stored in canonical form. Empty text
    /// clears it.
    pub fn set_data_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        self.data = if json.trim().is_empty() {
            Value::Null
        } else {
            canonicalize(&serde_json::from_str(json)?)
        };
        Ok(())
    }
}

impl ToCardJson for SubmitAction {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ActionKind::Submit.type_name());
        self.props.write(&mut bag);
        bag.raw("data", &self.data);
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_is_omitted_when_unset() {
        assert_eq!(
            SubmitAction::default().serialize(),
            "{\"type\":\"Action.Submit\"}\n"
        );
    }

    #[test]
    fn data_keys_are_sorted() {
        let mut action = SubmitAction::default();
        action
            .set_data_json(r#"{"z": 1, "a": {"y": true, "b": null}}"#)
            .expect("valid json");
        assert_eq!(
            action.serialize(),
            "{\"data\":{\"a\":{\"b\":null,\"y\":true},\"z\":1},\"type\":\"Action.Submit\"}\n"
        );
        assert_eq!(action.data_json(), action.data.to_string());
    }

    #[test]
    fn set_data_json_rejects_garbage_and_clears_on_empty() {
        let mut action = SubmitAction::new(json!("keep"));
        assert!(action.set_data_json("{not json").is_err());
        assert_eq!(action.data, json!("keep"));
        action.set_data_json("").expect("empty clears");
        assert!(action.data.is_null());
        assert_eq!(action.data_json(), "");
    }

    #[test]
    fn integral_floats_in_data_are_written_as_integers() {
        let action = SubmitAction::new(json!({"n": 42.0, "m": 1.50}));
        assert_eq!(
            action.serialize(),
            "{\"data\":{\"m\":1.5,\"n\":42},\"type\":\"Action.Submit\"}\n"
        );
        let mut action = SubmitAction::default();
        action.set_data_json("[2.0, 2.5]").expect("valid json");
        assert_eq!(action.data_json(), "[2,2.5]");
    }
}
