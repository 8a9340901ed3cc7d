//! Styling: token vocabularies, the colour palette, class lists and class
//! composition.

mod classes;
pub mod compose;
mod palette;
mod token;
mod variant;

pub use classes::ClassList;
pub use palette::Color;
pub(crate) use token::token_enum;
pub use token::{IconPosition, LabelPosition, Size, Token};
pub use variant::{
    AlertVariant, AvatarVariant, BadgeShape, BadgeVariant, ButtonVariant, Control, ControlState,
    TabVariant,
};
