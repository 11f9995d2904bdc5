use serde_json::Value;

use crate::element::{ElementKind, ElementProps};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

/// Time of day input. Times are kept as written (`HH:MM`), not validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeInput {
    pub props: ElementProps,
    pub placeholder: String,
    pub value: String,
    pub min: String,
    pub max: String,
}

impl TimeInput {
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
            min: reader.string("min", SchemaVersion::V1_0),
            max: reader.string("max", SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for TimeInput {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::TimeInput.type_name());
        self.props.write(&mut bag);
        bag.string_always("id", &self.props.id);
        bag.string("placeholder", &self.placeholder);
        bag.string("value", &self.value);
        bag.string("min", &self.min);
        bag.string("max", &self.max);
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_written_when_set() {
        let input = TimeInput {
            min: "09:00".into(),
            max: "17:30".into(),
            ..TimeInput::new("start")
        };
        assert_eq!(
            input.serialize(),
            "{\"id\":\"start\",\"max\":\"17:30\",\"min\":\"09:00\",\"type\":\"Input.Time\"}\n"
        );
    }
}
