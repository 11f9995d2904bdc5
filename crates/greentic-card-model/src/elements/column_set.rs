use serde_json::Value;

use crate::action::CardAction;
use crate::element::{CardElement, ElementKind, ElementProps};
use crate::elements::BackgroundImage;
use crate::enums::{ContainerStyle, VerticalContentAlignment};
use crate::parser::{read_elements, read_select_action, read_typed_items};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;
use crate::warnings::WarningCode;

/// Horizontal arrangement of [`Column`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnSet {
    pub props: ElementProps,
    pub columns: Vec<Column>,
    pub style: ContainerStyle,
    pub bleed: bool,
    pub select_action: Option<Box<CardAction>>,
}

impl ColumnSet {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            props: ElementProps::read(reader),
            columns: read_typed_items(
                reader,
                "columns",
                Some(ElementKind::Column.type_name()),
                Column::read,
            ),
            style: reader.enumeration("style", SchemaVersion::V1_2),
            bleed: reader.bool("bleed", false, SchemaVersion::V1_2),
            select_action: read_select_action(reader, SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for ColumnSet {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::ColumnSet.type_name());
        self.props.write(&mut bag);
        bag.array("columns", self.columns.iter().map(ToCardJson::to_json).collect());
        bag.enumeration("style", self.style);
        bag.bool("bleed", self.bleed, false);
        bag.optional("selectAction", self.select_action.as_ref().map(|a| a.to_json()));
        bag.into_value()
    }
}

/// Width of a column inside its set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fit the content.
    #[default]
    Auto,
    /// Take the remaining space.
    Stretch,
    /// Relative weight against sibling weighted columns.
    Weight(u32),
    Pixels(u32),
}

impl ColumnWidth {
    /// Accepts numbers, `"auto"`, `"stretch"`, `"<n>"` and `"<n>px"`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(ColumnWidth::Weight),
            Value::String(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("auto") {
                    Some(ColumnWidth::Auto)
                } else if text.eq_ignore_ascii_case("stretch") {
                    Some(ColumnWidth::Stretch)
                } else if let Some(pixels) = text.strip_suffix("px") {
                    pixels.trim().parse().ok().map(ColumnWidth::Pixels)
                } else {
                    text.parse().ok().map(ColumnWidth::Weight)
                }
            }
            _ => None,
        }
    }

    /// `None` for the default width.
    pub fn to_value(self) -> Option<Value> {
        match self {
            ColumnWidth::Auto => None,
            ColumnWidth::Stretch => Some(Value::from("stretch")),
            ColumnWidth::Weight(weight) => Some(Value::from(weight)),
            ColumnWidth::Pixels(pixels) => Some(Value::from(format!("{pixels}px"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    pub props: ElementProps,
    pub items: Vec<CardElement>,
    pub width: ColumnWidth,
    pub style: ContainerStyle,
    pub vertical_content_alignment: VerticalContentAlignment,
    pub bleed: bool,
    pub background_image: Option<BackgroundImage>,
    pub select_action: Option<Box<CardAction>>,
}

impl Column {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            props: ElementProps::read(reader),
            items: read_elements(reader, "items", SchemaVersion::V1_0),
            width: read_width(reader),
            style: reader.enumeration("style", SchemaVersion::V1_0),
            vertical_content_alignment: reader
                .enumeration("verticalContentAlignment", SchemaVersion::V1_1),
            bleed: reader.bool("bleed", false, SchemaVersion::V1_2),
            background_image: BackgroundImage::read_property(reader, SchemaVersion::V1_2),
            select_action: read_select_action(reader, SchemaVersion::V1_0),
        })
    }
}

fn read_width(reader: &mut ObjectReader<'_, '_>) -> ColumnWidth {
    let Some(value) = reader.value("width", SchemaVersion::V1_0) else {
        return ColumnWidth::Auto;
    };
    ColumnWidth::from_value(value).unwrap_or_else(|| {
        let path = reader.child_path("width");
        reader.ctx().warn(
            WarningCode::InvalidValue,
            path,
            format!("{value} is not a valid column width; using auto"),
        );
        ColumnWidth::Auto
    })
}

impl ToCardJson for Column {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::Column.type_name());
        self.props.write(&mut bag);
        bag.array("items", self.items.iter().map(ToCardJson::to_json).collect());
        bag.optional("width", self.width.to_value());
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
    use serde_json::json;

    #[test]
    fn width_forms() {
        assert_eq!(ColumnWidth::from_value(&json!(2)), Some(ColumnWidth::Weight(2)));
        assert_eq!(ColumnWidth::from_value(&json!("3")), Some(ColumnWidth::Weight(3)));
        assert_eq!(ColumnWidth::from_value(&json!("Stretch")), Some(ColumnWidth::Stretch));
        assert_eq!(ColumnWidth::from_value(&json!("50px")), Some(ColumnWidth::Pixels(50)));
        assert_eq!(ColumnWidth::from_value(&json!("wide")), None);
        assert_eq!(ColumnWidth::from_value(&json!(1.5)), None);
        assert_eq!(ColumnWidth::Auto.to_value(), None);
        assert_eq!(ColumnWidth::Pixels(50).to_value(), Some(json!("50px")));
    }

    #[test]
    fn column_set_serializes_columns() {
        let set = ColumnSet {
            columns: vec![
                Column::default(),
                Column {
                    width: ColumnWidth::Weight(2),
                    ..Column::default()
                },
            ],
            ..ColumnSet::default()
        };
        assert_eq!(
            set.serialize(),
            "{\"columns\":[{\"items\":[],\"type\":\"Column\"},\
             {\"items\":[],\"type\":\"Column\",\"width\":2}],\"type\":\"ColumnSet\"}\n"
        );
    }
}
