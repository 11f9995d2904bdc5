use serde_json::Value;

use crate::action::CardAction;
use crate::element::{ElementKind, ElementProps};
use crate::enums::{HorizontalAlignment, ImageSize, ImageStyle};
use crate::parser::read_select_action;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    pub props: ElementProps,
    pub url: String,
    pub alt_text: String,
    pub background_color: String,
    pub horizontal_alignment: HorizontalAlignment,
    pub size: ImageSize,
    pub style: ImageStyle,
    pub select_action: Option<Box<CardAction>>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        let url = reader.required_string("url")?;
        Ok(Self {
            props: ElementProps::read(reader),
            url,
            alt_text: reader.string("altText", SchemaVersion::V1_0),
            background_color: reader.string("backgroundColor", SchemaVersion::V1_1),
            horizontal_alignment: reader.enumeration("horizontalAlignment", SchemaVersion::V1_0),
            size: reader.enumeration("size", SchemaVersion::V1_0),
            style: reader.enumeration("style", SchemaVersion::V1_0),
            select_action: read_select_action(reader, SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for Image {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::Image.type_name());
        self.props.write(&mut bag);
        bag.string_always("url", &self.url);
        bag.string("altText", &self.alt_text);
        bag.string("backgroundColor", &self.background_color);
        bag.enumeration("horizontalAlignment", self.horizontal_alignment);
        bag.enumeration("size", self.size);
        bag.enumeration("style", self.style);
        bag.optional("selectAction", self.select_action.as_ref().map(|a| a.to_json()));
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::OpenUrlAction;

    #[test]
    fn serializes_url_and_non_defaults() {
        let image = Image {
            size: ImageSize::Small,
            style: ImageStyle::Person,
            ..Image::new("http://")
        };
        assert_eq!(
            image.serialize(),
            "{\"size\":\"Small\",\"style\":\"Person\",\"type\":\"Image\",\"url\":\"http://\"}\n"
        );
    }

    #[test]
    fn select_action_is_nested() {
        let image = Image {
            select_action: Some(Box::new(OpenUrlAction::new("https://example.com").into())),
            ..Image::new("http://")
        };
        assert_eq!(
            image.serialize(),
            "{\"selectAction\":{\"type\":\"Action.OpenUrl\",\"url\":\"https://example.com\"},\
             \"type\":\"Image\",\"url\":\"http://\"}\n"
        );
    }
}
