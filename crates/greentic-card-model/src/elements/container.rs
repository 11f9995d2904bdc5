use serde_json::Value;

use crate::action::CardAction;
use crate::element::{CardElement, ElementKind, ElementProps};
use crate::elements::BackgroundImage;
use crate::enums::{ContainerStyle, VerticalContentAlignment};
use crate::parser::{read_elements, read_select_action};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

/// Groups body elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub props: ElementProps,
    pub items: Vec<CardElement>,
    pub style: ContainerStyle,
    pub vertical_content_alignment: VerticalContentAlignment,
    pub bleed: bool,
    pub background_image: Option<BackgroundImage>,
    pub select_action: Option<Box<CardAction>>,
}

impl Container {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            props: ElementProps::read(reader),
            items: read_elements(reader, "items", SchemaVersion::V1_0),
            style: reader.enumeration("style", SchemaVersion::V1_0),
            vertical_content_alignment: reader
                .enumeration("verticalContentAlignment", SchemaVersion::V1_1),
            bleed: reader.bool("bleed", false, SchemaVersion::V1_2),
            background_image: BackgroundImage::read_property(reader, SchemaVersion::V1_2),
            select_action: read_select_action(reader, SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for Container {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::Container.type_name());
        self.props.write(&mut bag);
        bag.array("items", self.items.iter().map(ToCardJson::to_json).collect());
        bag.enumeration("style", self.style);
        bag.enumeration("verticalContentAlignment", self.vertical_content_alignment);
        bag.bool("bleed", self.bleed, false);
        bag.optional(
            "backgroundImage",
            self.background_image.as_ref().map(ToCardJson::to_json),
        );
        bag.optional("selectAction", self.select_action.as_ref().map(|a| a.to_json()));
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TextBlock;

    #[test]
    fn empty_container_keeps_items() {
        assert_eq!(
            Container::default().serialize(),
            "{\"items\":[],\"type\":\"Container\"}\n"
        );
    }

    #[test]
    fn nested_items_follow_the_same_rules() {
        let container = Container {
            items: vec![TextBlock::new("a").into()],
            style: ContainerStyle::Emphasis,
            vertical_content_alignment: VerticalContentAlignment::Center,
            ..Container::default()
        };
        assert_eq!(
            container.serialize(),
            "{\"items\":[{\"text\":\"a\",\"type\":\"TextBlock\"}],\"style\":\"emphasis\",\
             \"type\":\"Container\",\"verticalContentAlignment\":\"Center\"}\n"
        );
    }
}
