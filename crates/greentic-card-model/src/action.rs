//! Base action element and its closed variant set.

use serde_json::Value;

use crate::actions::{OpenUrlAction, ShowCardAction, SubmitAction, ToggleVisibilityAction};
use crate::element::Fallback;
use crate::enums::ActionStyle;
use crate::errors::TypeMismatchError;
use crate::parser::{CardNode, read_fallback};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;
use crate::warnings::WarningCode;

/// Runtime tag of a [`CardAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    OpenUrl,
    Submit,
    ShowCard,
    ToggleVisibility,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::OpenUrl,
        ActionKind::Submit,
        ActionKind::ShowCard,
        ActionKind::ToggleVisibility,
    ];

    pub fn type_name(self) -> &'static str {
        match self {
            ActionKind::OpenUrl => "Action.OpenUrl",
            ActionKind::Submit => "Action.Submit",
            ActionKind::ShowCard => "Action.ShowCard",
            ActionKind::ToggleVisibility => "Action.ToggleVisibility",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    pub fn since(self) -> SchemaVersion {
        match self {
            ActionKind::ToggleVisibility => SchemaVersion::V1_2,
            _ => SchemaVersion::V1_0,
        }
    }
}

pub type ActionFallback = Fallback<CardAction>;

/// Properties shared by every action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionProps {
    pub id: String,
    pub title: String,
    pub icon_url: String,
    pub style: ActionStyle,
    pub fallback: ActionFallback,
}

impl ActionProps {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> Self {
        Self {
            id: reader.string("id", SchemaVersion::V1_0),
            title: reader.string("title", SchemaVersion::V1_0),
            icon_url: reader.string("iconUrl", SchemaVersion::V1_1),
            style: reader.enumeration("style", SchemaVersion::V1_2),
            fallback: read_fallback(reader),
        }
    }

    pub(crate) fn write(&self, bag: &mut PropertyBag) {
        bag.string("id", &self.id);
        bag.string("title", &self.title);
        bag.string("iconUrl", &self.icon_url);
        bag.enumeration("style", self.style);
        self.fallback.write(bag);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    OpenUrl(OpenUrlAction),
    Submit(SubmitAction),
    ShowCard(ShowCardAction),
    ToggleVisibility(ToggleVisibilityAction),
}

macro_rules! each_action {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            CardAction::OpenUrl($inner) => $body,
            CardAction::Submit($inner) => $body,
            CardAction::ShowCard($inner) => $body,
            CardAction::ToggleVisibility($inner) => $body,
        }
    };
}

impl CardAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            CardAction::OpenUrl(_) => ActionKind::OpenUrl,
            CardAction::Submit(_) => ActionKind::Submit,
            CardAction::ShowCard(_) => ActionKind::ShowCard,
            CardAction::ToggleVisibility(_) => ActionKind::ToggleVisibility,
        }
    }

    pub fn props(&self) -> &ActionProps {
        each_action!(self, action => &action.props)
    }

    pub fn props_mut(&mut self) -> &mut ActionProps {
        each_action!(self, action => &mut action.props)
    }

    pub fn title(&self) -> &str {
        &self.props().title
    }

    pub fn downcast_ref<T: ActionVariant>(&self) -> Result<&T, TypeMismatchError> {
        T::from_action(self).ok_or_else(|| self.mismatch(T::KIND))
    }

    pub fn downcast_mut<T: ActionVariant>(&mut self) -> Result<&mut T, TypeMismatchError> {
        let err = self.mismatch(T::KIND);
        T::from_action_mut(self).ok_or(err)
    }

    pub fn try_into_variant<T: ActionVariant>(self) -> Result<T, TypeMismatchError> {
        let err = self.mismatch(T::KIND);
        T::from_action_owned(self).ok_or(err)
    }

    pub fn expect_kind(&self, kind: ActionKind) -> Result<&Self, TypeMismatchError> {
        if self.kind() == kind {
            Ok(self)
        } else {
            Err(self.mismatch(kind))
        }
    }

    fn mismatch(&self, expected: ActionKind) -> TypeMismatchError {
        TypeMismatchError::new(expected.type_name(), self.kind().type_name())
    }
}

impl ToCardJson for CardAction {
    fn to_json(&self) -> Value {
        each_action!(self, action => action.to_json())
    }
}

impl CardNode for CardAction {
    const NOUN: &'static str = "action";
    const UNKNOWN_TYPE: WarningCode = WarningCode::UnknownActionType;

    fn parse_known(type_name: &str, reader: &mut ObjectReader<'_, '_>) -> Option<NodeResult<Self>> {
        let kind = ActionKind::from_type_name(type_name)?;
        if !reader.ctx().supports(kind.since()) {
            return None;
        }
        Some(match kind {
            ActionKind::OpenUrl => OpenUrlAction::read(reader).map(CardAction::OpenUrl),
            ActionKind::Submit => SubmitAction::read(reader).map(CardAction::Submit),
            ActionKind::ShowCard => ShowCardAction::read(reader).map(CardAction::ShowCard),
            ActionKind::ToggleVisibility => {
                ToggleVisibilityAction::read(reader).map(CardAction::ToggleVisibility)
            }
        })
    }
}

/// Concrete action type reachable from a [`CardAction`] handle.
pub trait ActionVariant: Sized {
    const KIND: ActionKind;

    fn from_action(action: &CardAction) -> Option<&Self>;
    fn from_action_mut(action: &mut CardAction) -> Option<&mut Self>;
    fn from_action_owned(action: CardAction) -> Option<Self>;
}

macro_rules! action_variant {
    ($($variant:ident => $ty:ident),* $(,)?) => {
        $(
            impl ActionVariant for $ty {
                const KIND: ActionKind = ActionKind::$variant;

                fn from_action(action: &CardAction) -> Option<&Self> {
                    match action {
                        CardAction::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_action_mut(action: &mut CardAction) -> Option<&mut Self> {
                    match action {
                        CardAction::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_action_owned(action: CardAction) -> Option<Self> {
                    match action {
                        CardAction::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for CardAction {
                fn from(value: $ty) -> Self {
                    CardAction::$variant(value)
                }
            }
        )*
    };
}

action_variant!(
    OpenUrl => OpenUrlAction,
    Submit => SubmitAction,
    ShowCard => ShowCardAction,
    ToggleVisibility => ToggleVisibilityAction,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_rejects_other_actions() {
        let action: CardAction = SubmitAction::default().into();
        assert_eq!(
            action.downcast_ref::<ShowCardAction>().unwrap_err(),
            TypeMismatchError::new("Action.ShowCard", "Action.Submit")
        );
        assert!(action.downcast_ref::<SubmitAction>().is_ok());
        assert!(action.expect_kind(ActionKind::OpenUrl).is_err());
    }

    #[test]
    fn props_are_shared_across_variants() {
        let mut action: CardAction = OpenUrlAction::new("http://").into();
        action.props_mut().title = "Open".into();
        assert_eq!(action.title(), "Open");
        let open = action.try_into_variant::<OpenUrlAction>().expect("open url");
        assert_eq!(open.props.title, "Open");
    }

    #[test]
    fn kinds_round_trip_through_type_names() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(ActionKind::from_type_name("Action.Execute"), None);
    }
}
