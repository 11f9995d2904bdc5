//! Typed Adaptive Card object model.
//! Cards parse from JSON against a target schema version, collecting warnings
//! instead of failing, and serialize back to canonical key-sorted JSON.

pub mod action;
pub mod actions;
pub mod card;
pub mod config;
pub mod element;
pub mod elements;
pub mod enums;
pub mod errors;
pub(crate) mod parser;
pub mod property_bag;
pub(crate) mod reader;
pub mod version;
pub mod warnings;

pub use action::{ActionFallback, ActionKind, ActionProps, ActionVariant, CardAction};
pub use actions::{
    OpenUrlAction, ShowCardAction, SubmitAction, ToggleVisibilityAction, ToggleVisibilityTarget,
};
pub use card::{AdaptiveCard, ParseResult};
pub use config::ParseConfig;
pub use element::{CardElement, ElementFallback, ElementKind, ElementProps, ElementVariant, Fallback};
pub use elements::{
    ActionSet, BackgroundImage, Choice, ChoiceSetInput, Column, ColumnSet, ColumnWidth, Container,
    Fact, FactSet, Image, ImageSet, TextBlock, TextInput, TimeInput,
};
pub use enums::*;
pub use errors::{ParseError, TypeMismatchError};
pub use property_bag::{PropertyBag, ToCardJson};
pub use version::{InvalidSchemaVersion, SchemaVersion};
pub use warnings::{ParseWarning, WarningCode};

/// Parses `json` against `target_version` (for example `"1.2"`).
pub fn parse_card(json: &str, target_version: &str) -> Result<ParseResult, ParseError> {
    AdaptiveCard::deserialize_from_str(json, target_version)
}

/// Canonical JSON text of `card`, newline terminated.
pub fn serialize_card(card: &AdaptiveCard) -> String {
    card.serialize()
}
