use serde_json::Value;

use crate::element::{ElementKind, ElementProps};
use crate::enums::{FontType, ForegroundColor, HorizontalAlignment, TextSize, TextWeight};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

/// Block of (markdown-capable) text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    pub props: ElementProps,
    pub text: String,
    pub color: ForegroundColor,
    pub font_type: FontType,
    pub horizontal_alignment: HorizontalAlignment,
    pub is_subtle: bool,
    /// `0` means no limit.
    pub max_lines: u32,
    pub size: TextSize,
    pub weight: TextWeight,
    pub wrap: bool,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        let text = reader.required_string("text")?;
        Ok(Self {
            props: ElementProps::read(reader),
            text,
            color: reader.enumeration("color", SchemaVersion::V1_0),
            font_type: reader.enumeration("fontType", SchemaVersion::V1_2),
            horizontal_alignment: reader.enumeration("horizontalAlignment", SchemaVersion::V1_0),
            is_subtle: reader.bool("isSubtle", false, SchemaVersion::V1_0),
            max_lines: reader.count("maxLines", SchemaVersion::V1_0),
            size: reader.enumeration("size", SchemaVersion::V1_0),
            weight: reader.enumeration("weight", SchemaVersion::V1_0),
            wrap: reader.bool("wrap", false, SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for TextBlock {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::TextBlock.type_name());
        self.props.write(&mut bag);
        bag.string_always("text", &self.text);
        bag.enumeration("color", self.color);
        bag.enumeration("fontType", self.font_type);
        bag.enumeration("horizontalAlignment", self.horizontal_alignment);
        bag.bool("isSubtle", self.is_subtle, false);
        bag.count("maxLines", self.max_lines);
        bag.enumeration("size", self.size);
        bag.enumeration("weight", self.weight);
        bag.bool("wrap", self.wrap, false);
        bag.into_value()
    }
}
