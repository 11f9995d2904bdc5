//! Polymorphic node parsing and `fallback` resolution.
//!
//! Per-variant property reading lives next to each type; this module decides
//! which variant to build from the `type` discriminator and what to do when
//! that fails.

use serde_json::{Map, Value};
use tracing::debug;

use crate::action::CardAction;
use crate::element::{CardElement, Fallback};
use crate::property_bag::ToCardJson;
use crate::reader::{NodeResult, ObjectReader, ParseContext, child_path};
use crate::version::SchemaVersion;
use crate::warnings::WarningCode;

/// A polymorphic node family selected by its `type` discriminator.
pub(crate) trait CardNode: Sized + ToCardJson {
    /// Noun used in warning messages.
    const NOUN: &'static str;
    const UNKNOWN_TYPE: WarningCode;

    /// Builds the node for a known `type_name`, or `None` when the type is not
    /// available at the target schema version.
    fn parse_known(type_name: &str, reader: &mut ObjectReader<'_, '_>) -> Option<NodeResult<Self>>;
}

/// Why a node could not be built even after following its fallback chain.
struct Unresolved(&'static str);

/// Parses one node, substituting its fallback when it cannot be built. A node
/// that resolves to nothing is reported once, at `path`.
pub(crate) fn parse_node<N: CardNode>(value: &Value, path: &str, ctx: &mut ParseContext) -> Option<N> {
    match resolve_node(value, path, ctx) {
        Ok(node) => Some(node),
        Err(Unresolved(reason)) => {
            ctx.warn(
                WarningCode::ElementDropped,
                path,
                format!("{} dropped: {reason}", N::NOUN),
            );
            None
        }
    }
}

fn resolve_node<N: CardNode>(
    value: &Value,
    path: &str,
    ctx: &mut ParseContext,
) -> Result<N, Unresolved> {
    let Some(object) = value.as_object() else {
        ctx.warn(
            WarningCode::InvalidValue,
            path,
            format!("{} must be a JSON object", N::NOUN),
        );
        return Err(Unresolved("not a JSON object"));
    };

    let (code, message) = {
        let mut reader = ObjectReader::new(object, path, ctx);
        match object.get("type") {
            None | Some(Value::Null) => (
                WarningCode::MissingRequiredField,
                format!("{} is missing required property `type`", N::NOUN),
            ),
            Some(Value::String(type_name)) => match N::parse_known(type_name, &mut reader) {
                Some(Ok(node)) => {
                    reader.finish();
                    return Ok(node);
                }
                Some(Err(missing)) => (
                    WarningCode::MissingRequiredField,
                    format!("{type_name} is missing required property `{}`", missing.property),
                ),
                None => (
                    N::UNKNOWN_TYPE,
                    format!("unknown {} type `{type_name}`", N::NOUN),
                ),
            },
            Some(other) => (
                WarningCode::InvalidValue,
                format!("{} `type` must be a string, found {other}", N::NOUN),
            ),
        }
    };
    ctx.warn(code, path, message);
    resolve_fallback(object, path, ctx)
}

fn resolve_fallback<N: CardNode>(
    object: &Map<String, Value>,
    path: &str,
    ctx: &mut ParseContext,
) -> Result<N, Unresolved> {
    match object.get("fallback") {
        Some(fallback @ Value::Object(_)) => {
            ctx.warn(
                WarningCode::FallbackApplied,
                path,
                format!("replacing {} with its fallback", N::NOUN),
            );
            parse_nested_fallback(fallback, &child_path(path, "fallback"), ctx)
        }
        Some(Value::String(mode)) if mode == "drop" => Err(Unresolved("its fallback is \"drop\"")),
        Some(Value::Null) | None => Err(Unresolved("no fallback")),
        Some(_) => {
            ctx.warn(
                WarningCode::InvalidValue,
                child_path(path, "fallback"),
                "fallback must be \"drop\" or an object",
            );
            Err(Unresolved("unusable fallback"))
        }
    }
}

fn parse_nested_fallback<N: CardNode>(
    value: &Value,
    path: &str,
    ctx: &mut ParseContext,
) -> Result<N, Unresolved> {
    if ctx.fallback_depth >= ctx.config.max_fallback_depth {
        let limit = ctx.config.max_fallback_depth;
        ctx.warn(
            WarningCode::FallbackDepthExceeded,
            path,
            format!("fallback chain deeper than {limit}; giving up"),
        );
        return Err(Unresolved("fallback chain too deep"));
    }
    ctx.fallback_depth += 1;
    let node = resolve_node(value, path, ctx);
    ctx.fallback_depth -= 1;
    node
}

/// Reads the `fallback` of a node that parsed successfully.
pub(crate) fn read_fallback<N: CardNode>(reader: &mut ObjectReader<'_, '_>) -> Fallback<N> {
    let path = reader.child_path("fallback");
    match reader.value("fallback", SchemaVersion::V1_0) {
        None => Fallback::None,
        Some(Value::String(mode)) if mode == "drop" => Fallback::Drop,
        Some(value @ Value::Object(_)) => {
            match parse_nested_fallback::<N>(value, &path, reader.ctx()) {
                Ok(node) => Fallback::Content(Box::new(node)),
                // The whole chain resolved to nothing, which is what "drop" means.
                Err(Unresolved(reason)) => {
                    reader.ctx().warn(
                        WarningCode::InvalidValue,
                        path,
                        format!("fallback content unusable ({reason}); stored as drop"),
                    );
                    Fallback::Drop
                }
            }
        }
        Some(_) => {
            reader.ctx().warn(
                WarningCode::InvalidValue,
                path,
                "fallback must be \"drop\" or an object",
            );
            Fallback::None
        }
    }
}

/// Parses a heterogeneous element array such as `body` or `items`.
pub(crate) fn read_elements(
    reader: &mut ObjectReader<'_, '_>,
    key: &str,
    since: SchemaVersion,
) -> Vec<CardElement> {
    read_nodes(reader, key, since)
}

pub(crate) fn read_actions(
    reader: &mut ObjectReader<'_, '_>,
    key: &str,
    since: SchemaVersion,
) -> Vec<CardAction> {
    read_nodes(reader, key, since)
}

fn read_nodes<N: CardNode>(reader: &mut ObjectReader<'_, '_>, key: &str, since: SchemaVersion) -> Vec<N> {
    let Some(items) = reader.array(key, since) else {
        return Vec::new();
    };
    let path = reader.child_path(key);
    let ctx = reader.ctx();
    let nodes: Vec<N> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| parse_node(item, &child_path(&path, index), ctx))
        .collect();
    debug!(path = %path, parsed = nodes.len(), total = items.len(), "parsed {} list", N::NOUN);
    nodes
}

/// Parses an array whose items all have one implied type (columns, facts,
/// images, toggle targets). Items may omit `type`; a different `type` drops
/// the item.
pub(crate) fn read_typed_items<T>(
    reader: &mut ObjectReader<'_, '_>,
    key: &str,
    type_name: Option<&str>,
    read: impl Fn(&mut ObjectReader<'_, '_>) -> NodeResult<T>,
) -> Vec<T> {
    let Some(items) = reader.array(key, SchemaVersion::V1_0) else {
        return Vec::new();
    };
    let path = reader.child_path(key);
    let ctx = reader.ctx();
    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = child_path(&path, index);
        let Some(object) = item.as_object() else {
            ctx.warn(WarningCode::InvalidValue, item_path, "item must be a JSON object");
            continue;
        };
        if let (Some(expected), Some(found)) = (type_name, object.get("type")) {
            if found.as_str() != Some(expected) {
                ctx.warn(
                    WarningCode::InvalidValue,
                    item_path,
                    format!("expected `{expected}` item, found {found}; item dropped"),
                );
                continue;
            }
        }
        let mut item_reader = ObjectReader::new(object, item_path.clone(), ctx);
        match read(&mut item_reader) {
            Ok(value) => {
                item_reader.finish();
                parsed.push(value);
            }
            Err(missing) => ctx.warn(
                WarningCode::MissingRequiredField,
                item_path,
                format!("item is missing required property `{}`; item dropped", missing.property),
            ),
        }
    }
    parsed
}

/// Reads a `selectAction`. Show-card actions cannot be select actions.
pub(crate) fn read_select_action(
    reader: &mut ObjectReader<'_, '_>,
    since: SchemaVersion,
) -> Option<Box<CardAction>> {
    let value = reader.value("selectAction", since)?;
    let path = reader.child_path("selectAction");
    let action = parse_node::<CardAction>(value, &path, reader.ctx())?;
    if matches!(action, CardAction::ShowCard(_)) {
        reader.ctx().warn(
            WarningCode::InvalidValue,
            path,
            "Action.ShowCard is not allowed as a selectAction",
        );
        return None;
    }
    Some(Box::new(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;
    use crate::elements::TextBlock;
    use serde_json::json;

    fn parse_element(value: Value, config: ParseConfig) -> (Option<CardElement>, ParseContext) {
        let mut ctx = ParseContext::new(config);
        let element = parse_node::<CardElement>(&value, "/body/0", &mut ctx);
        (element, ctx)
    }

    fn codes(ctx: &ParseContext) -> Vec<WarningCode> {
        ctx.warnings.iter().map(|w| w.code).collect()
    }

    #[test]
    fn unknown_type_without_fallback_is_dropped() {
        let (element, ctx) = parse_element(json!({"type": "Rating"}), ParseConfig::default());
        assert!(element.is_none());
        assert_eq!(
            codes(&ctx),
            [WarningCode::UnknownElementType, WarningCode::ElementDropped]
        );
    }

    #[test]
    fn fallback_chain_is_followed_to_a_known_type() {
        let value = json!({
            "type": "Rating",
            "fallback": {
                "type": "Carousel",
                "fallback": {"type": "TextBlock", "text": "plain"}
            }
        });
        let (element, ctx) = parse_element(value, ParseConfig::default());
        let element = element.expect("fallback element");
        assert_eq!(element.downcast_ref::<TextBlock>().expect("text").text, "plain");
        assert_eq!(
            codes(&ctx),
            [
                WarningCode::UnknownElementType,
                WarningCode::FallbackApplied,
                WarningCode::UnknownElementType,
                WarningCode::FallbackApplied,
            ]
        );
        assert_eq!(ctx.warnings[2].path, "/body/0/fallback");
        assert_eq!(ctx.fallback_depth, 0);
    }

    #[test]
    fn fallback_chain_is_bounded() {
        let mut value = json!({"type": "TextBlock", "text": "end"});
        for _ in 0..5 {
            value = json!({"type": "Unknown", "fallback": value});
        }
        let config = ParseConfig {
            max_fallback_depth: 3,
            ..ParseConfig::default()
        };
        let (element, ctx) = parse_element(value, config);
        assert!(element.is_none());
        let codes = codes(&ctx);
        assert!(codes.contains(&WarningCode::FallbackDepthExceeded));
        assert_eq!(codes.last(), Some(&WarningCode::ElementDropped));
        assert_eq!(
            ctx.warnings.last().expect("drop").message,
            "element dropped: fallback chain too deep"
        );
    }

    #[test]
    fn drop_fallback_is_honoured() {
        let (element, ctx) = parse_element(
            json!({"type": "Rating", "fallback": "drop"}),
            ParseConfig::default(),
        );
        assert!(element.is_none());
        assert_eq!(codes(&ctx)[1], WarningCode::ElementDropped);
    }

    #[test]
    fn missing_required_field_uses_fallback() {
        let value = json!({
            "type": "TextBlock",
            "fallback": {"type": "TextBlock", "text": "backup"}
        });
        let (element, ctx) = parse_element(value, ParseConfig::default());
        assert_eq!(
            element.expect("fallback").downcast_ref::<TextBlock>().expect("text").text,
            "backup"
        );
        assert!(ctx.warnings[0].is_error());
    }

    #[test]
    fn newer_types_are_unknown_to_older_targets() {
        let value = json!({"type": "ActionSet", "actions": []});
        let (element, ctx) = parse_element(value, ParseConfig::new(SchemaVersion::V1_1));
        assert!(element.is_none());
        assert_eq!(codes(&ctx)[0], WarningCode::UnknownElementType);
    }

    #[test]
    fn non_object_items_are_rejected() {
        let (element, ctx) = parse_element(json!("TextBlock"), ParseConfig::default());
        assert!(element.is_none());
        assert_eq!(
            codes(&ctx),
            [WarningCode::InvalidValue, WarningCode::ElementDropped]
        );
    }

    #[test]
    fn non_string_type_is_an_invalid_value() {
        let (element, ctx) = parse_element(json!({"type": 5}), ParseConfig::default());
        assert!(element.is_none());
        assert_eq!(
            codes(&ctx),
            [WarningCode::InvalidValue, WarningCode::ElementDropped]
        );
        assert_eq!(ctx.warnings[0].message, "element `type` must be a string, found 5");
        assert!(!ctx.warnings[0].is_error());
    }

    #[test]
    fn non_string_type_still_uses_fallback() {
        let value = json!({"type": ["TextBlock"], "fallback": {"type": "TextBlock", "text": "ok"}});
        let (element, ctx) = parse_element(value, ParseConfig::default());
        assert!(element.is_some());
        assert_eq!(
            codes(&ctx),
            [WarningCode::InvalidValue, WarningCode::FallbackApplied]
        );
    }

    #[test]
    fn unusable_stored_fallback_is_not_reported_as_a_drop() {
        let value = json!({
            "type": "TextBlock",
            "text": "primary",
            "fallback": {"type": "Rating"}
        });
        let (element, ctx) = parse_element(value, ParseConfig::default());
        let element = element.expect("primary element");
        let text = element.downcast_ref::<TextBlock>().expect("text");
        assert!(matches!(text.props.fallback, Fallback::Drop));
        assert_eq!(
            codes(&ctx),
            [WarningCode::UnknownElementType, WarningCode::InvalidValue]
        );
        assert_eq!(ctx.warnings[1].path, "/body/0/fallback");
        assert_eq!(
            ctx.warnings[1].message,
            "fallback content unusable (no fallback); stored as drop"
        );
    }
}
