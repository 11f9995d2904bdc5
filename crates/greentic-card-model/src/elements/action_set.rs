use serde_json::Value;

use crate::action::CardAction;
use crate::element::{ElementKind, ElementProps};
use crate::parser::read_actions;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

/// Actions placed inline in the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionSet {
    pub props: ElementProps,
    pub actions: Vec<CardAction>,
}

impl ActionSet {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            props: ElementProps::read(reader),
            actions: read_actions(reader, "actions", SchemaVersion::V1_2),
        })
    }
}

impl ToCardJson for ActionSet {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::ActionSet.type_name());
        self.props.write(&mut bag);
        bag.array("actions", self.actions.iter().map(ToCardJson::to_json).collect());
        bag.into_value()
    }
}
