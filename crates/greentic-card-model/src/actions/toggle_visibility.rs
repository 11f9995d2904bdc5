use serde_json::Value;

use crate::action::{ActionKind, ActionProps};
use crate::enums::IsVisible;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader, child_path};
use crate::version::SchemaVersion;
use crate::warnings::WarningCode;

/// One element whose visibility an [`ToggleVisibilityAction`] changes.
/// Targets with an empty `element_id` are neither read nor written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleVisibilityTarget {
    /// Id of the target element. Not checked against the card.
    pub element_id: String,
    pub is_visible: IsVisible,
}

impl ToggleVisibilityTarget {
    pub fn toggle(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            is_visible: IsVisible::Toggle,
        }
    }

    pub fn show(element_id: impl Into<String>, visible: bool) -> Self {
        Self {
            element_id: element_id.into(),
            is_visible: IsVisible::from_bool(visible),
        }
    }

    fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        let element_id = reader.required_id("elementId")?;
        let is_visible = match reader.value("isVisible", SchemaVersion::V1_0) {
            None => IsVisible::Toggle,
            Some(Value::Bool(visible)) => IsVisible::from_bool(*visible),
            Some(other) => {
                let path = reader.child_path("isVisible");
                reader.ctx().warn(
                    WarningCode::InvalidValue,
                    path,
                    format!("`isVisible` must be a boolean, found {other}; toggling instead"),
                );
                IsVisible::Toggle
            }
        };
        Ok(Self {
            element_id,
            is_visible,
        })
    }
}

impl ToCardJson for ToggleVisibilityTarget {
    fn to_json(&self) -> Value {
        match self.is_visible.as_bool() {
            None => Value::String(self.element_id.clone()),
            Some(visible) => {
                let mut bag = PropertyBag::default();
                bag.string_always("elementId", &self.element_id);
                bag.insert("isVisible", visible);
                bag.into_value()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToggleVisibilityAction {
    pub props: ActionProps,
    pub target_elements: Vec<ToggleVisibilityTarget>,
}

impl ToggleVisibilityAction {
    pub fn new(target_elements: Vec<ToggleVisibilityTarget>) -> Self {
        Self {
            target_elements,
            ..Self::default()
        }
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        let target_elements = read_targets(reader);
        Ok(Self {
            props: ActionProps::read(reader),
            target_elements,
        })
    }
}

fn read_targets(reader: &mut ObjectReader<'_, '_>) -> Vec<ToggleVisibilityTarget> {
    let Some(items) = reader.array("targetElements", SchemaVersion::V1_0) else {
        return Vec::new();
    };
    let path = reader.child_path("targetElements");
    let ctx = reader.ctx();
    let mut targets = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = child_path(&path, index);
        match item {
            Value::String(element_id) if !element_id.is_empty() => {
                targets.push(ToggleVisibilityTarget::toggle(element_id.as_str()));
            }
            Value::Object(object) => {
                let mut item_reader = ObjectReader::new(object, item_path.clone(), ctx);
                match ToggleVisibilityTarget::read(&mut item_reader) {
                    Ok(target) => {
                        item_reader.finish();
                        targets.push(target);
                    }
                    Err(_) => ctx.warn(
                        WarningCode::InvalidValue,
                        item_path,
                        "target has no usable `elementId`; target dropped",
                    ),
                }
            }
            _ => ctx.warn(
                WarningCode::InvalidValue,
                item_path,
                "target must be a non-empty element id or an object; target dropped",
            ),
        }
    }
    targets
}

impl ToCardJson for ToggleVisibilityAction {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ActionKind::ToggleVisibility.type_name());
        self.props.write(&mut bag);
        bag.array(
            "targetElements",
            self.target_elements
                .iter()
                .filter(|target| !target.element_id.is_empty())
                .map(ToCardJson::to_json)
                .collect(),
        );
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;
    use crate::reader::ParseContext;
    use serde_json::json;

    #[test]
    fn toggle_targets_are_bare_ids() {
        let action = ToggleVisibilityAction::new(vec![
            ToggleVisibilityTarget::toggle("a"),
            ToggleVisibilityTarget::show("b", false),
        ]);
        assert_eq!(
            action.serialize(),
            "{\"targetElements\":[\"a\",{\"elementId\":\"b\",\"isVisible\":false}],\
             \"type\":\"Action.ToggleVisibility\"}\n"
        );
    }

    #[test]
    fn empty_target_list_is_still_written() {
        assert_eq!(
            ToggleVisibilityAction::default().serialize(),
            "{\"targetElements\":[],\"type\":\"Action.ToggleVisibility\"}\n"
        );
    }

    #[test]
    fn targets_without_ids_are_dropped() {
        let value = json!({
            "type": "Action.ToggleVisibility",
            "targetElements": ["a", {"isVisible": true}, 7, {"elementId": "c", "isVisible": true}]
        });
        let object = value.as_object().expect("object");
        let mut ctx = ParseContext::new(ParseConfig::default());
        let mut reader = ObjectReader::new(object, "/actions/0", &mut ctx);
        let action = ToggleVisibilityAction::read(&mut reader).expect("action");
        reader.finish();
        assert_eq!(
            action.target_elements,
            [
                ToggleVisibilityTarget::toggle("a"),
                ToggleVisibilityTarget::show("c", true),
            ]
        );
        let paths: Vec<_> = ctx.warnings.iter().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, ["/actions/0/targetElements/1", "/actions/0/targetElements/2"]);
    }

    #[test]
    fn empty_element_ids_are_dropped_in_both_forms() {
        let action = ToggleVisibilityAction::new(vec![
            ToggleVisibilityTarget::toggle(""),
            ToggleVisibilityTarget::show("", true),
            ToggleVisibilityTarget::toggle("kept"),
        ]);
        assert_eq!(
            action.serialize(),
            "{\"targetElements\":[\"kept\"],\"type\":\"Action.ToggleVisibility\"}\n"
        );

        let value = json!({
            "type": "Action.ToggleVisibility",
            "targetElements": ["", {"elementId": "", "isVisible": true}, "kept"]
        });
        let object = value.as_object().expect("object");
        let mut ctx = ParseContext::new(ParseConfig::default());
        let mut reader = ObjectReader::new(object, "/actions/0", &mut ctx);
        let parsed = ToggleVisibilityAction::read(&mut reader).expect("action");
        reader.finish();
        assert_eq!(parsed.target_elements, [ToggleVisibilityTarget::toggle("kept")]);
        let paths: Vec<_> = ctx.warnings.iter().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, ["/actions/0/targetElements/0", "/actions/0/targetElements/1"]);
        assert!(ctx.warnings.iter().all(|w| w.code == WarningCode::InvalidValue));
    }
}
