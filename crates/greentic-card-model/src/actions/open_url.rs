use serde_json::Value;

use crate::action::{ActionKind, ActionProps};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenUrlAction {
    pub props: ActionProps,
    pub url: String,
}

impl OpenUrlAction {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        let url = reader.required_string("url")?;
        Ok(Self {
            props: ActionProps::read(reader),
            url,
        })
    }
}

impl ToCardJson for OpenUrlAction {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ActionKind::OpenUrl.type_name());
        self.props.write(&mut bag);
        bag.string_always("url", &self.url);
        bag.into_value()
    }
}
