//! The fixed Tailwind colour palette.

use super::token::token_enum;

token_enum! {
    /// One of the 22 Tailwind palette names accepted by every `color` field.
    pub enum Color {
        Slate => "slate",
        Gray => "gray",
        Zinc => "zinc",
        Neutral => "neutral",
        Stone => "stone",
        Red => "red",
        Orange => "orange",
        Amber => "amber",
        Yellow => "yellow",
        Lime => "lime",
        Green => "green",
        Emerald => "emerald",
        Teal => "teal",
        Cyan => "cyan",
        Sky => "sky",
        Blue => "blue",
        Indigo => "indigo",
        Violet => "violet",
        Purple => "purple",
        Fuchsia => "fuchsia",
        Pink => "pink",
        Rose => "rose",
    }
    default Slate
}

impl Color {
    /// Light hues whose 500 accent is too pale on a white background.
    pub fn uses_dark_accent(self) -> bool {
        matches!(
            self,
            Color::Amber | Color::Yellow | Color::Lime | Color::Green | Color::Cyan
        )
    }
}
