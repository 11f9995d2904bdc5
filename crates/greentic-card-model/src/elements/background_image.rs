use serde_json::Value;

use crate::enums::{BackgroundImageFillMode, HorizontalAlignment, VerticalContentAlignment};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{ObjectReader, ParseContext};
use crate::version::SchemaVersion;
use crate::warnings::WarningCode;

/// Image painted behind a card, container or column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundImage {
    pub url: String,
    pub fill_mode: BackgroundImageFillMode,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalContentAlignment,
}

impl BackgroundImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    fn is_plain_url(&self) -> bool {
        self.fill_mode == BackgroundImageFillMode::Cover
            && self.horizontal_alignment == HorizontalAlignment::Left
            && self.vertical_alignment == VerticalContentAlignment::Top
    }

    /// Reads `backgroundImage`, either a URL string or an object.
    pub(crate) fn read_property(
        reader: &mut ObjectReader<'_, '_>,
        since: SchemaVersion,
    ) -> Option<Self> {
        let value = reader.value("backgroundImage", since)?;
        let path = reader.child_path("backgroundImage");
        Self::from_value(value, &path, reader.ctx())
    }

    fn from_value(value: &Value, path: &str, ctx: &mut ParseContext) -> Option<Self> {
        match value {
            Value::String(url) => Some(Self::new(url.clone())),
            Value::Object(object) => {
                let mut reader = ObjectReader::new(object, path, ctx);
                let Ok(url) = reader.required_string("url") else {
                    ctx.warn(
                        WarningCode::MissingRequiredField,
                        path,
                        "background image is missing required property `url`",
                    );
                    return None;
                };
                let image = Self {
                    url,
                    fill_mode: reader.enumeration("fillMode", SchemaVersion::V1_2),
                    horizontal_alignment: reader
                        .enumeration("horizontalAlignment", SchemaVersion::V1_2),
                    vertical_alignment: reader.enumeration("verticalAlignment", SchemaVersion::V1_2),
                };
                reader.finish();
                Some(image)
            }
            _ => {
                ctx.warn(
                    WarningCode::InvalidValue,
                    path,
                    "background image must be a URL string or an object",
                );
                None
            }
        }
    }
}

impl ToCardJson for BackgroundImage {
    fn to_json(&self) -> Value {
        if self.is_plain_url() {
            return Value::String(self.url.clone());
        }
        let mut bag = PropertyBag::default();
        bag.string_always("url", &self.url);
        bag.enumeration("fillMode", self.fill_mode);
        bag.enumeration("horizontalAlignment", self.horizontal_alignment);
        bag.enumeration("verticalAlignment", self.vertical_alignment);
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;
    use serde_json::json;

    #[test]
    fn plain_url_is_written_as_string() {
        assert_eq!(BackgroundImage::new("http://").to_json(), json!("http://"));
    }

    #[test]
    fn styled_image_is_written_as_object() {
        let image = BackgroundImage {
            fill_mode: BackgroundImageFillMode::Repeat,
            ..BackgroundImage::new("http://")
        };
        assert_eq!(image.serialize(), "{\"fillMode\":\"repeat\",\"url\":\"http://\"}\n");
    }

    #[test]
    fn parses_both_forms() {
        let mut ctx = ParseContext::new(ParseConfig::default());
        let from_string = BackgroundImage::from_value(&json!("http://a"), "/bg", &mut ctx);
        assert_eq!(from_string, Some(BackgroundImage::new("http://a")));
        let from_object = BackgroundImage::from_value(
            &json!({"url": "http://a", "verticalAlignment": "Bottom"}),
            "/bg",
            &mut ctx,
        )
        .expect("object form");
        assert_eq!(from_object.vertical_alignment, VerticalContentAlignment::Bottom);
        assert!(ctx.warnings.is_empty());
    }

    #[test]
    fn object_without_url_is_rejected() {
        let mut ctx = ParseContext::new(ParseConfig::default());
        assert!(BackgroundImage::from_value(&json!({"fillMode": "repeat"}), "/bg", &mut ctx).is_none());
        assert_eq!(ctx.warnings[0].code, WarningCode::MissingRequiredField);
    }
}
