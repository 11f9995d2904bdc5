//! The card document and the parse entry points.

use serde_json::Value;
use tracing::debug;

use crate::action::CardAction;
use crate::config::ParseConfig;
use crate::element::CardElement;
use crate::elements::BackgroundImage;
use crate::enums::VerticalContentAlignment;
use crate::errors::ParseError;
use crate::parser::{read_actions, read_elements, read_select_action};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{ObjectReader, ParseContext};
use crate::version::SchemaVersion;
use crate::warnings::{ParseWarning, WarningCode};

/// Root of a card tree. Also embedded by [`crate::actions::ShowCardAction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaptiveCard {
    version: String,
    pub body: Vec<CardElement>,
    pub actions: Vec<CardAction>,
    pub fallback_text: String,
    pub speak: String,
    pub lang: String,
    pub vertical_content_alignment: VerticalContentAlignment,
    pub background_image: Option<BackgroundImage>,
    pub select_action: Option<Box<CardAction>>,
}

/// Outcome of a successful parse: the card plus everything worth telling the
/// author about it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub card: AdaptiveCard,
    pub warnings: Vec<ParseWarning>,
}

impl ParseResult {
    /// True when a node was dropped for lack of a required property.
    pub fn has_errors(&self) -> bool {
        self.warnings.iter().any(ParseWarning::is_error)
    }
}

impl AdaptiveCard {
    pub const TYPE_NAME: &'static str = "AdaptiveCard";

    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Schema version the card declares, as written.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn deserialize_from_str(json: &str, target_version: &str) -> Result<ParseResult, ParseError> {
        let version: SchemaVersion = target_version
            .parse()
            .map_err(|_| ParseError::InvalidTargetVersion(target_version.to_string()))?;
        Self::deserialize_with(json, &ParseConfig::new(version))
    }

    pub fn deserialize_with(json: &str, config: &ParseConfig) -> Result<ParseResult, ParseError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value, config)
    }

    pub fn from_json_value(value: &Value, config: &ParseConfig) -> Result<ParseResult, ParseError> {
        let object = value.as_object().ok_or(ParseError::NotAnObject)?;
        match object.get("type") {
            None | Some(Value::Null) => return Err(ParseError::MissingRootType),
            Some(Value::String(name)) if name == Self::TYPE_NAME => {}
            Some(Value::String(name)) => return Err(ParseError::UnexpectedRootType(name.clone())),
            Some(other) => return Err(ParseError::UnexpectedRootType(other.to_string())),
        }

        let mut ctx = ParseContext::new(config.clone());
        let card = {
            let mut reader = ObjectReader::new(object, "", &mut ctx);
            let card = Self::read(&mut reader, true);
            reader.finish();
            card
        };
        debug!(
            target_version = %config.target_version,
            elements = card.body.len(),
            warnings = ctx.warnings.len(),
            "parsed card"
        );
        Ok(ParseResult {
            card,
            warnings: ctx.warnings,
        })
    }

    /// Reads card properties; `root` is false for cards nested in a show-card
    /// action, which may omit their version.
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>, root: bool) -> Self {
        reader.skip("$schema");
        Self {
            version: read_version(reader, root),
            body: read_elements(reader, "body", SchemaVersion::V1_0),
            actions: read_actions(reader, "actions", SchemaVersion::V1_0),
            fallback_text: reader.string("fallbackText", SchemaVersion::V1_0),
            speak: reader.string("speak", SchemaVersion::V1_0),
            lang: reader.string("lang", SchemaVersion::V1_0),
            vertical_content_alignment: reader
                .enumeration("verticalContentAlignment", SchemaVersion::V1_1),
            background_image: BackgroundImage::read_property(reader, SchemaVersion::V1_0),
            select_action: read_select_action(reader, SchemaVersion::V1_1),
        }
    }

    /// First element in the body tree with the given id.
    pub fn find_element(&self, id: &str) -> Option<&CardElement> {
        if id.is_empty() {
            return None;
        }
        let mut found = None;
        for element in &self.body {
            element.walk(&mut |candidate| {
                if found.is_none() && candidate.id() == id {
                    found = Some(candidate);
                }
            });
            if found.is_some() {
                break;
            }
        }
        found
    }
}

fn read_version(reader: &mut ObjectReader<'_, '_>, root: bool) -> String {
    let path = reader.child_path("version");
    let Some(raw) = reader.optional_string("version", SchemaVersion::V1_0) else {
        if root {
            reader.ctx().warn(
                WarningCode::MissingRequiredField,
                path,
                "card is missing required property `version`",
            );
        }
        return String::new();
    };
    let target = reader.ctx().target_version();
    match raw.parse::<SchemaVersion>() {
        Ok(declared) if !target.supports(declared) => reader.ctx().warn(
            WarningCode::SchemaVersionTooNew,
            path,
            format!("card declares schema {declared}, target is {target}"),
        ),
        Ok(_) => {}
        Err(err) => reader.ctx().warn(WarningCode::InvalidValue, path, err.to_string()),
    }
    raw
}

impl ToCardJson for AdaptiveCard {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(Self::TYPE_NAME);
        bag.string("version", &self.version);
        bag.array("body", self.body.iter().map(ToCardJson::to_json).collect());
        bag.non_empty_array("actions", self.actions.iter().map(ToCardJson::to_json).collect());
        bag.string("fallbackText", &self.fallback_text);
        bag.string("speak", &self.speak);
        bag.string("lang", &self.lang);
        bag.enumeration("verticalContentAlignment", self.vertical_content_alignment);
        bag.optional(
            "backgroundImage",
            self.background_image.as_ref().map(ToCardJson::to_json),
        );
        bag.optional("selectAction", self.select_action.as_ref().map(|a| a.to_json()));
        bag.into_value()
    }
}
