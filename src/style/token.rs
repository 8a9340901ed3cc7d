//! Closed string vocabularies used by component fields.
//!
//! Every enumerated field (size, variant, position, ...) is backed by a
//! [`Token`] enum. The registry uses [`Token::names`] as the allowed set, and
//! components read the field back as the enum.

/// A closed set of named values.
pub trait Token: Copy + Default + PartialEq + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The canonical name of this member.
    fn as_str(self) -> &'static str;

    /// Look a member up by name.
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// All names, for use as an allowed set.
    fn names() -> Vec<String> {
        Self::ALL.iter().map(|t| t.as_str().to_owned()).collect()
    }
}

/// Declare a [`Token`] enum with its names and default member.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $crate::style::Token for $name {
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::style::Token::as_str(*self))
            }
        }
    };
}

pub(crate) use token_enum;

// ---------------------------------------------------------------------------
// Shared vocabularies
// ---------------------------------------------------------------------------

token_enum! {
    /// Three-step size scale shared by form controls, buttons and tabs.
    pub enum Size {
        Small => "small",
        Normal => "normal",
        Large => "large",
    }
    default Normal
}

token_enum! {
    /// Which side of a control an icon sits on.
    pub enum IconPosition {
        Left => "left",
        Right => "right",
    }
    default Left
}

token_enum! {
    /// Where a toggle's label sits relative to the switch.
    pub enum LabelPosition {
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
    }
    default Right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_names() {
        assert_eq!(Size::parse("large"), Some(Size::Large));
        assert_eq!(Size::parse("huge"), None);
        assert_eq!(Size::names(), vec!["small", "normal", "large"]);
        assert_eq!(Size::default(), Size::Normal);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(IconPosition::Right.to_string(), "right");
        assert_eq!(LabelPosition::default().to_string(), "right");
    }
}
