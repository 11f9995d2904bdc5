use serde_json::Value;

use crate::element::{ElementKind, ElementProps};
use crate::enums::ChoiceSetStyle;
use crate::parser::read_typed_items;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

const CHOICE_TYPE: &str = "Input.Choice";

/// One option of a [`ChoiceSetInput`]; `value` is what gets submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

impl Choice {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }

    fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            title: reader.required_string("title")?,
            value: reader.required_string("value")?,
        })
    }
}

impl ToCardJson for Choice {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(CHOICE_TYPE);
        bag.string_always("title", &self.title);
        bag.string_always("value", &self.value);
        bag.into_value()
    }
}

/// Pick one or several [`Choice`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceSetInput {
    pub props: ElementProps,
    pub choices: Vec<Choice>,
    pub style: ChoiceSetStyle,
    pub is_multi_select: bool,
    /// Selected values; comma separated when `is_multi_select`.
    pub value: String,
    pub placeholder: String,
}

impl ChoiceSetInput {
    pub fn new(id: impl Into<String>, choices: Vec<Choice>) -> Self {
        let mut input = Self {
            choices,
            ..Self::default()
        };
        input.props.id = id.into();
        input
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        reader.required_id("id")?;
        Ok(Self {
            props: ElementProps::read(reader),
            choices: read_typed_items(reader, "choices", Some(CHOICE_TYPE), Choice::read),
            style: reader.enumeration("style", SchemaVersion::V1_0),
            is_multi_select: reader.bool("isMultiSelect", false, SchemaVersion::V1_0),
            value: reader.string("value", SchemaVersion::V1_0),
            placeholder: reader.string("placeholder", SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for ChoiceSetInput {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::ChoiceSetInput.type_name());
        self.props.write(&mut bag);
        bag.string_always("id", &self.props.id);
        bag.array("choices", self.choices.iter().map(ToCardJson::to_json).collect());
        bag.enumeration("style", self.style);
        bag.bool("isMultiSelect", self.is_multi_select, false);
        bag.string("value", &self.value);
        bag.string("placeholder", &self.placeholder);
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;
    use crate::reader::ParseContext;
    use crate::warnings::WarningCode;
    use serde_json::json;

    #[test]
    fn choices_carry_their_type() {
        let input = ChoiceSetInput {
            style: ChoiceSetStyle::Expanded,
            is_multi_select: true,
            value: "r,g".into(),
            ..ChoiceSetInput::new("color", vec![Choice::new("Red", "r")])
        };
        assert_eq!(
            input.serialize(),
            "{\"choices\":[{\"title\":\"Red\",\"type\":\"Input.Choice\",\"value\":\"r\"}],\
             \"id\":\"color\",\"isMultiSelect\":true,\"style\":\"expanded\",\
             \"type\":\"Input.ChoiceSet\",\"value\":\"r,g\"}\n"
        );
    }

    #[test]
    fn malformed_choices_are_dropped() {
        let value = json!({
            "type": "Input.ChoiceSet",
            "id": "color",
            "choices": [
                {"title": "Red", "value": "r"},
                {"title": "No value"},
                {"type": "Input.Text", "title": "Blue", "value": "b"},
                {"type": "Input.Choice", "title": "Green", "value": "g"}
            ]
        });
        let object = value.as_object().expect("object");
        let mut ctx = ParseContext::new(ParseConfig::default());
        let mut reader = ObjectReader::new(object, "/body/0", &mut ctx);
        let input = ChoiceSetInput::read(&mut reader).expect("choice set");
        reader.finish();
        assert_eq!(input.choices, [Choice::new("Red", "r"), Choice::new("Green", "g")]);
        let codes: Vec<_> = ctx.warnings.iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            [WarningCode::MissingRequiredField, WarningCode::InvalidValue]
        );
        assert_eq!(ctx.warnings[1].path, "/body/0/choices/2");
    }
}
