//! Visual variants that feed class composition.

use super::token::token_enum;

token_enum! {
    pub enum ButtonVariant {
        Filled => "filled",
        Soft => "soft",
        Solid => "solid",
        Outline => "outline",
        Ghost => "ghost",
        Link => "link",
    }
    default Filled
}

token_enum! {
    pub enum BadgeVariant {
        Filled => "filled",
        Outline => "outline",
        Soft => "soft",
        Solid => "solid",
    }
    default Filled
}

token_enum! {
    pub enum BadgeShape {
        Rounded => "rounded",
        Pill => "pill",
        Square => "square",
    }
    default Rounded
}

token_enum! {
    pub enum AlertVariant {
        Filled => "filled",
        Outline => "outline",
        Solid => "solid",
    }
    default Filled
}

token_enum! {
    pub enum AvatarVariant {
        Filled => "filled",
        Soft => "soft",
        Outline => "outline",
    }
    default Filled
}

token_enum! {
    pub enum TabVariant {
        Underline => "underline",
        Pills => "pills",
        Bordered => "bordered",
    }
    default Underline
}

token_enum! {
    /// Interaction state of a form control.
    pub enum ControlState {
        Idle => "idle",
        Disabled => "disabled",
        Readonly => "readonly",
        Loading => "loading",
    }
    default Idle
}

token_enum! {
    /// Which size scale a control uses.
    pub enum Control {
        Input => "input",
        Button => "button",
    }
    default Input
}
