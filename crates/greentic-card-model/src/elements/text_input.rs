use serde_json::Value;

use crate::element::{ElementKind, ElementProps};
use crate::enums::TextInputStyle;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

/// Free text input. `props.id` is required and names the submitted value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub props: ElementProps,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
    /// `0` means no limit.
    pub max_length: u32,
    pub style: TextInputStyle,
}

impl TextInput {
    pub fn new(id: impl Into<String>) -> Self {
        let mut input = Self::default();
        input.props.id = id.into();
        input
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        reader.required_id("id")?;
        Ok(Self {
            props: ElementProps::read(reader),
            placeholder: reader.string("placeholder", SchemaVersion::V1_0),
            value: reader.string("value", SchemaVersion::V1_0),
            is_multiline: reader.bool("isMultiline", false, SchemaVersion::V1_0),
            max_length: reader.count("maxLength", SchemaVersion::V1_0),
            style: reader.enumeration("style", SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for TextInput {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::TextInput.type_name());
        self.props.write(&mut bag);
        bag.string_always("id", &self.props.id);
        bag.string("placeholder", &self.placeholder);
        bag.string("value", &self.value);
        bag.bool("isMultiline", self.is_multiline, false);
        bag.count("maxLength", self.max_length);
        bag.enumeration("style", self.style);
        bag.into_value()
    }
}
