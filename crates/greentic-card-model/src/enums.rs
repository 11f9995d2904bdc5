//! Closed style enumerations shared by elements and actions.
//!
//! Every enum has exactly one wire string per member and exactly one default
//! member; the default is what an absent property parses to and is never
//! written by the serializer.

use std::fmt;

/// Table-driven conversion between an enum and its wire strings.
pub trait CardEnum: Copy + Eq + Default + fmt::Debug + 'static {
    /// Enum name used in warnings.
    const NAME: &'static str;
    /// All members, default first.
    const MEMBERS: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive lookup of a wire string.
    fn parse(value: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.as_str() == value)
    }

    fn is_default(self) -> bool {
        self == Self::default()
    }
}

macro_rules! card_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            #[default] $default:ident => $default_str:literal,
            $($variant:ident => $wire:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $default,
            $($variant),*
        }

        impl CardEnum for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [Self] = &[$name::$default, $($name::$variant),*];

            fn as_str(self) -> &'static str {
                match self {
                    $name::$default => $default_str,
                    $($name::$variant => $wire),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

card_enum! {
    HorizontalAlignment {
        #[default] Left => "left",
        Center => "center",
        Right => "right",
    }
}

card_enum! {
    VerticalContentAlignment {
        #[default] Top => "Top",
        Center => "Center",
        Bottom => "Bottom",
    }
}

card_enum! {
    ForegroundColor {
        #[default] Default => "Default",
        Dark => "Dark",
        Light => "Light",
        Accent => "Accent",
        Good => "Good",
        Warning => "Warning",
        Attention => "Attention",
    }
}

card_enum! {
    TextSize {
        #[default] Default => "Default",
        Small => "Small",
        Medium => "Medium",
        Large => "Large",
        ExtraLarge => "ExtraLarge",
    }
}

card_enum! {
    TextWeight {
        #[default] Default => "Default",
        Lighter => "Lighter",
        Bolder => "Bolder",
    }
}

card_enum! {
    FontType {
        #[default] Default => "Default",
        Monospace => "Monospace",
    }
}

card_enum! {
    /// Space above an element.
    Spacing {
        #[default] Default => "default",
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
        Padding => "padding",
    }
}

card_enum! {
    HeightType {
        #[default] Auto => "Auto",
        Stretch => "Stretch",
    }
}

card_enum! {
    ImageSize {
        #[default] Auto => "Auto",
        Stretch => "Stretch",
        Small => "Small",
        Medium => "Medium",
        Large => "Large",
    }
}

card_enum! {
    ImageStyle {
        #[default] Default => "Default",
        Person => "Person",
    }
}

card_enum! {
    ContainerStyle {
        #[default] Default => "default",
        Emphasis => "emphasis",
        Good => "good",
        Attention => "attention",
        Warning => "warning",
        Accent => "accent",
    }
}

card_enum! {
    ActionStyle {
        #[default] Default => "default",
        Positive => "positive",
        Destructive => "destructive",
    }
}

card_enum! {
    BackgroundImageFillMode {
        #[default] Cover => "cover",
        RepeatHorizontally => "repeatHorizontally",
        RepeatVertically => "repeatVertically",
        Repeat => "repeat",
    }
}

card_enum! {
    TextInputStyle {
        #[default] Text => "text",
        Tel => "tel",
        Url => "url",
        Email => "email",
    }
}

card_enum! {
    ChoiceSetStyle {
        #[default] Compact => "compact",
        Expanded => "expanded",
    }
}

/// Visibility directive carried by a toggle-visibility target.
///
/// Not a wire string: `Toggle` targets are written as a bare element id and the
/// other two as an `isVisible` boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IsVisible {
    #[default]
    Toggle,
    True,
    False,
}

impl IsVisible {
    pub fn from_bool(visible: bool) -> Self {
        if visible {
            IsVisible::True
        } else {
            IsVisible::False
        }
    }

    /// `None` for `Toggle`.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            IsVisible::Toggle => None,
            IsVisible::True => Some(true),
            IsVisible::False => Some(false),
        }
    }
}
