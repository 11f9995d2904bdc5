//! Base card element: common properties, the closed variant set and the
//! checked downcast from a generic handle to a concrete variant.

use serde_json::Value;

use crate::elements::{
    ActionSet, ChoiceSetInput, Column, ColumnSet, Container, FactSet, Image, ImageSet, TextBlock,
    TextInput, TimeInput,
};
use crate::enums::{HeightType, Spacing};
use crate::errors::TypeMismatchError;
use crate::parser::{CardNode, read_fallback};
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;
use crate::warnings::WarningCode;

/// Runtime tag of a [`CardElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    TextBlock,
    Image,
    Container,
    ColumnSet,
    Column,
    FactSet,
    ImageSet,
    ActionSet,
    TextInput,
    TimeInput,
    ChoiceSetInput,
}

impl ElementKind {
    pub const ALL: [ElementKind; 11] = [
        ElementKind::TextBlock,
        ElementKind::Image,
        ElementKind::Container,
        ElementKind::ColumnSet,
        ElementKind::Column,
        ElementKind::FactSet,
        ElementKind::ImageSet,
        ElementKind::ActionSet,
        ElementKind::TextInput,
        ElementKind::TimeInput,
        ElementKind::ChoiceSetInput,
    ];

    /// Value of the `type` discriminator.
    pub fn type_name(self) -> &'static str {
        match self {
            ElementKind::TextBlock => "TextBlock",
            ElementKind::Image => "Image",
            ElementKind::Container => "Container",
            ElementKind::ColumnSet => "ColumnSet",
            ElementKind::Column => "Column",
            ElementKind::FactSet => "FactSet",
            ElementKind::ImageSet => "ImageSet",
            ElementKind::ActionSet => "ActionSet",
            ElementKind::TextInput => "Input.Text",
            ElementKind::TimeInput => "Input.Time",
            ElementKind::ChoiceSetInput => "Input.ChoiceSet",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// Schema version that introduced the element type.
    pub fn since(self) -> SchemaVersion {
        match self {
            ElementKind::ActionSet => SchemaVersion::V1_2,
            _ => SchemaVersion::V1_0,
        }
    }
}

/// Replacement used when a host cannot render a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<N> {
    None,
    /// `"fallback": "drop"`
    Drop,
    Content(Box<N>),
}

impl<N> Default for Fallback<N> {
    fn default() -> Self {
        Fallback::None
    }
}

impl<N: ToCardJson> Fallback<N> {
    pub fn is_none(&self) -> bool {
        matches!(self, Fallback::None)
    }

    pub fn content(&self) -> Option<&N> {
        match self {
            Fallback::Content(node) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn write(&self, bag: &mut PropertyBag) {
        match self {
            Fallback::None => {}
            Fallback::Drop => bag.insert("fallback", "drop"),
            Fallback::Content(node) => bag.insert("fallback", node.to_json()),
        }
    }
}

pub type ElementFallback = Fallback<CardElement>;

/// Properties shared by every card element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementProps {
    pub id: String,
    pub spacing: Spacing,
    pub separator: bool,
    pub is_visible: bool,
    pub height: HeightType,
    pub fallback: ElementFallback,
}

impl Default for ElementProps {
    fn default() -> Self {
        Self {
            id: String::new(),
            spacing: Spacing::Default,
            separator: false,
            is_visible: true,
            height: HeightType::Auto,
            fallback: Fallback::None,
        }
    }
}

impl ElementProps {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> Self {
        Self {
            id: reader.string("id", SchemaVersion::V1_0),
            spacing: reader.enumeration("spacing", SchemaVersion::V1_0),
            separator: reader.bool("separator", false, SchemaVersion::V1_0),
            is_visible: reader.bool("isVisible", true, SchemaVersion::V1_2),
            height: reader.enumeration("height", SchemaVersion::V1_1),
            fallback: read_fallback(reader),
        }
    }

    pub(crate) fn write(&self, bag: &mut PropertyBag) {
        bag.string("id", &self.id);
        bag.enumeration("spacing", self.spacing);
        bag.bool("separator", self.separator, false);
        bag.bool("isVisible", self.is_visible, true);
        bag.enumeration("height", self.height);
        self.fallback.write(bag);
    }
}

/// A body element. The variant is fixed when the value is built.
#[derive(Debug, Clone, PartialEq)]
pub enum CardElement {
    TextBlock(TextBlock),
    Image(Image),
    Container(Container),
    ColumnSet(ColumnSet),
    Column(Column),
    FactSet(FactSet),
    ImageSet(ImageSet),
    ActionSet(ActionSet),
    TextInput(TextInput),
    TimeInput(TimeInput),
    ChoiceSetInput(ChoiceSetInput),
}

macro_rules! each_element {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            CardElement::TextBlock($inner) => $body,
            CardElement::Image($inner) => $body,
            CardElement::Container($inner) => $body,
            CardElement::ColumnSet($inner) => $body,
            CardElement::Column($inner) => $body,
            CardElement::FactSet($inner) => $body,
            CardElement::ImageSet($inner) => $body,
            CardElement::ActionSet($inner) => $body,
            CardElement::TextInput($inner) => $body,
            CardElement::TimeInput($inner) => $body,
            CardElement::ChoiceSetInput($inner) => $body,
        }
    };
}

impl CardElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            CardElement::TextBlock(_) => ElementKind::TextBlock,
            CardElement::Image(_) => ElementKind::Image,
            CardElement::Container(_) => ElementKind::Container,
            CardElement::ColumnSet(_) => ElementKind::ColumnSet,
            CardElement::Column(_) => ElementKind::Column,
            CardElement::FactSet(_) => ElementKind::FactSet,
            CardElement::ImageSet(_) => ElementKind::ImageSet,
            CardElement::ActionSet(_) => ElementKind::ActionSet,
            CardElement::TextInput(_) => ElementKind::TextInput,
            CardElement::TimeInput(_) => ElementKind::TimeInput,
            CardElement::ChoiceSetInput(_) => ElementKind::ChoiceSetInput,
        }
    }

    pub fn props(&self) -> &ElementProps {
        each_element!(self, element => &element.props)
    }

    pub fn props_mut(&mut self) -> &mut ElementProps {
        each_element!(self, element => &mut element.props)
    }

    pub fn id(&self) -> &str {
        &self.props().id
    }

    pub fn downcast_ref<T: ElementVariant>(&self) -> Result<&T, TypeMismatchError> {
        T::from_element(self).ok_or_else(|| self.mismatch(T::KIND))
    }

    pub fn downcast_mut<T: ElementVariant>(&mut self) -> Result<&mut T, TypeMismatchError> {
        let err = self.mismatch(T::KIND);
        T::from_element_mut(self).ok_or(err)
    }

    pub fn try_into_variant<T: ElementVariant>(self) -> Result<T, TypeMismatchError> {
        let err = self.mismatch(T::KIND);
        T::from_element_owned(self).ok_or(err)
    }

    /// Checks the runtime tag against `kind`.
    pub fn expect_kind(&self, kind: ElementKind) -> Result<&Self, TypeMismatchError> {
        if self.kind() == kind {
            Ok(self)
        } else {
            Err(self.mismatch(kind))
        }
    }

    fn mismatch(&self, expected: ElementKind) -> TypeMismatchError {
        TypeMismatchError::new(expected.type_name(), self.kind().type_name())
    }

    /// Depth-first visit of this element and every element nested inside it.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a CardElement)) {
        visit(self);
        match self {
            CardElement::Container(container) => {
                container.items.iter().for_each(|item| item.walk(visit));
            }
            CardElement::Column(column) => column.items.iter().for_each(|item| item.walk(visit)),
            CardElement::ColumnSet(set) => set
                .columns
                .iter()
                .flat_map(|column| column.items.iter())
                .for_each(|item| item.walk(visit)),
            _ => {}
        }
    }
}

impl ToCardJson for CardElement {
    fn to_json(&self) -> Value {
        each_element!(self, element => element.to_json())
    }
}

impl CardNode for CardElement {
    const NOUN: &'static str = "element";
    const UNKNOWN_TYPE: WarningCode = WarningCode::UnknownElementType;

    fn parse_known(type_name: &str, reader: &mut ObjectReader<'_, '_>) -> Option<NodeResult<Self>> {
        let kind = ElementKind::from_type_name(type_name)?;
        if !reader.ctx().supports(kind.since()) {
            return None;
        }
        Some(match kind {
            ElementKind::TextBlock => TextBlock::read(reader).map(CardElement::TextBlock),
            ElementKind::Image => Image::read(reader).map(CardElement::Image),
            ElementKind::Container => Container::read(reader).map(CardElement::Container),
            ElementKind::ColumnSet => ColumnSet::read(reader).map(CardElement::ColumnSet),
            ElementKind::Column => Column::read(reader).map(CardElement::Column),
            ElementKind::FactSet => FactSet::read(reader).map(CardElement::FactSet),
            ElementKind::ImageSet => ImageSet::read(reader).map(CardElement::ImageSet),
            ElementKind::ActionSet => ActionSet::read(reader).map(CardElement::ActionSet),
            ElementKind::TextInput => TextInput::read(reader).map(CardElement::TextInput),
            ElementKind::TimeInput => TimeInput::read(reader).map(CardElement::TimeInput),
            ElementKind::ChoiceSetInput => {
                ChoiceSetInput::read(reader).map(CardElement::ChoiceSetInput)
            }
        })
    }
}

/// Concrete element type reachable from a [`CardElement`] handle.
pub trait ElementVariant: Sized {
    const KIND: ElementKind;

    fn from_element(element: &CardElement) -> Option<&Self>;
    fn from_element_mut(element: &mut CardElement) -> Option<&mut Self>;
    fn from_element_owned(element: CardElement) -> Option<Self>;
}

macro_rules! element_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl ElementVariant for $variant {
                const KIND: ElementKind = ElementKind::$variant;

                fn from_element(element: &CardElement) -> Option<&Self> {
                    match element {
                        CardElement::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_element_mut(element: &mut CardElement) -> Option<&mut Self> {
                    match element {
                        CardElement::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_element_owned(element: CardElement) -> Option<Self> {
                    match element {
                        CardElement::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$variant> for CardElement {
                fn from(value: $variant) -> Self {
                    CardElement::$variant(value)
                }
            }
        )*
    };
}

element_variant!(
    TextBlock,
    Image,
    Container,
    ColumnSet,
    Column,
    FactSet,
    ImageSet,
    ActionSet,
    TextInput,
    TimeInput,
    ChoiceSetInput,
);
