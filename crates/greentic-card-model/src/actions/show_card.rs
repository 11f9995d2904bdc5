use serde_json::Value;

use crate::action::{ActionKind, ActionProps};
use crate::card::AdaptiveCard;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{MissingRequiredField, NodeResult, ObjectReader};
use crate::version::SchemaVersion;
use crate::warnings::WarningCode;

/// Reveals an embedded card owned by this action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowCardAction {
    pub props: ActionProps,
    pub card: AdaptiveCard,
}

impl ShowCardAction {
    pub fn new(card: AdaptiveCard) -> Self {
        Self {
            card,
            ..Self::default()
        }
    }

    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        const MISSING: MissingRequiredField = MissingRequiredField { property: "card" };

        let path = reader.child_path("card");
        let object = reader.object("card", SchemaVersion::V1_0).ok_or(MISSING)?;
        match object.get("type") {
            None => {}
            Some(Value::String(name)) if name == AdaptiveCard::TYPE_NAME => {}
            Some(other) => {
                reader.ctx().warn(
                    WarningCode::InvalidValue,
                    path,
                    format!("`card` must be an AdaptiveCard, found type {other}"),
                );
                return Err(MISSING);
            }
        }
        let card = {
            let mut card_reader = ObjectReader::new(object, path, reader.ctx());
            let card = AdaptiveCard::read(&mut card_reader, false);
            card_reader.finish();
            card
        };
        Ok(Self {
            props: ActionProps::read(reader),
            card,
        })
    }
}

impl ToCardJson for ShowCardAction {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ActionKind::ShowCard.type_name());
        self.props.write(&mut bag);
        bag.insert("card", self.card.to_json());
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::TextBlock;

    #[test]
    fn embeds_the_nested_card() {
        let mut card = AdaptiveCard::new("1.0");
        card.body.push(TextBlock::new("inner").into());
        let mut action = ShowCardAction::new(card);
        action.props.title = "More".into();
        assert_eq!(
            action.serialize(),
            "{\"card\":{\"body\":[{\"text\":\"inner\",\"type\":\"TextBlock\"}],\
             \"type\":\"AdaptiveCard\",\"version\":\"1.0\"},\
             \"title\":\"More\",\"type\":\"Action.ShowCard\"}\n"
        );
    }
}
