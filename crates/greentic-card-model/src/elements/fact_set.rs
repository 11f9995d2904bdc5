use serde_json::Value;

use crate::element::{ElementKind, ElementProps};
use crate::parser::read_typed_items;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};

/// Title/value pair shown in a [`FactSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            title: reader.required_string("title")?,
            value: reader.required_string("value")?,
        })
    }
}

impl ToCardJson for Fact {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::default();
        bag.string_always("title", &self.title);
        bag.string_always("value", &self.value);
        bag.into_value()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactSet {
    pub props: ElementProps,
    pub facts: Vec<Fact>,
}

impl FactSet {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            props: ElementProps::read(reader),
            facts: read_typed_items(reader, "facts", None, Fact::read),
        })
    }
}

impl ToCardJson for FactSet {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::FactSet.type_name());
        self.props.write(&mut bag);
        bag.array("facts", self.facts.iter().map(ToCardJson::to_json).collect());
        bag.into_value()
    }
}
