//! Class composition.
//!
//! Pure functions from (colour, variant, size, error state) to Tailwind class
//! strings. Every function is total over its inputs and deterministic, and
//! the rendered output always carries complete class names.

use super::palette::Color;
use super::token::Size;
use super::variant::{
    AlertVariant, AvatarVariant, BadgeVariant, ButtonVariant, Control, ControlState, TabVariant,
};

// ---------------------------------------------------------------------------
// Form controls
// ---------------------------------------------------------------------------

/// Focus border and ring. Errors always focus red.
pub fn focus(color: Color, has_error: bool) -> String {
    if has_error {
        return "focus:border-red-400 focus:ring-red-400".to_owned();
    }
    format!("focus:border-{color}-400 focus:ring-{color}-400")
}

/// Border and ring of an open/active control.
pub fn active_border(color: Color, has_error: bool) -> String {
    if has_error {
        return "border-red-400 ring-1 ring-red-400".to_owned();
    }
    format!("border-{color}-400 ring-1 ring-{color}-400")
}

/// Resting border colour.
pub fn border(color: Color, has_error: bool) -> String {
    if has_error {
        return "border-red-300".to_owned();
    }
    format!("border-{color}-300")
}

pub fn focus_ring(color: Color) -> String {
    format!("border-{color}-300")
}

/// Native accent colour for checkboxes and radios.
pub fn checkbox_accent(color: Color) -> String {
    let shade = if color.uses_dark_accent() { 600 } else { 500 };
    format!("accent-{color}-{shade}")
}

pub fn state(state: ControlState) -> &'static str {
    match state {
        ControlState::Disabled => "opacity-50 cursor-not-allowed bg-slate-50",
        ControlState::Readonly => "bg-slate-50 cursor-default",
        ControlState::Loading => "opacity-75 cursor-wait",
        ControlState::Idle => "",
    }
}

/// Text size and padding for a control at a given size.
pub fn size(size: Size, control: Control) -> &'static str {
    match (control, size) {
        (Control::Input, Size::Small) => "text-xs px-2 py-1",
        (Control::Input, Size::Large) => "text-lg px-4 py-3",
        (Control::Button, Size::Small) => "text-xs px-3 py-1",
        (Control::Button, Size::Large) => "text-lg px-6 py-3",
        (Control::Button, Size::Normal) => "text-sm px-4 py-2",
        _ => "text-sm px-3 py-2",
    }
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

pub fn toggle_active(color: Color) -> String {
    format!("checked:bg-{color}-400")
}

pub fn toggle_border(color: Color) -> String {
    format!("peer-checked:border-{color}-400")
}

// ---------------------------------------------------------------------------
// Buttons, badges, alerts, avatars
// ---------------------------------------------------------------------------

pub fn button(color: Color, variant: ButtonVariant) -> String {
    match variant {
        ButtonVariant::Solid => {
            format!("bg-{color}-500 text-white hover:bg-{color}-600 border border-transparent")
        }
        ButtonVariant::Soft => format!(
            "bg-{color}-50 text-{color}-700 hover:bg-{color}-100 border border-{color}-200"
        ),
        ButtonVariant::Outline => format!(
            "bg-transparent text-{color}-600 hover:bg-{color}-50 hover:text-white border border-{color}-300"
        ),
        ButtonVariant::Link => {
            format!("bg-transparent text-{color}-600 hover:underline hover:underline-offset-2")
        }
        ButtonVariant::Ghost => format!(
            "bg-transparent text-{color}-600 hover:bg-{color}-50 hover:text-{color}-700 border border-transparent"
        ),
        ButtonVariant::Filled => format!(
            "bg-{color}-50 text-{color}-600 hover:bg-{color}-100 border border-transparent"
        ),
    }
}

pub fn badge(color: Color, variant: BadgeVariant) -> String {
    match variant {
        BadgeVariant::Filled => format!("bg-{color}-100 text-{color}-800 border-{color}-200"),
        BadgeVariant::Outline => format!("border border-{color}-300 text-{color}-700 bg-transparent"),
        BadgeVariant::Soft => format!("bg-{color}-50 text-{color}-700 border border-{color}-200"),
        BadgeVariant::Solid => format!("bg-{color}-600 text-white border border-{color}-600"),
    }
}

/// Status dot inside a badge.
pub fn dot(color: Color) -> String {
    format!("bg-{color}-500")
}

pub fn alert(color: Color, variant: AlertVariant) -> String {
    match variant {
        AlertVariant::Filled => format!("bg-{color}-50 text-{color}-700 border border-{color}-200"),
        AlertVariant::Outline => format!("bg-white text-{color}-600 border border-{color}-200"),
        AlertVariant::Solid => format!("bg-{color}-500 text-white"),
    }
}

/// Icon fill inside an alert. Solid alerts use white icons.
pub fn alert_icon(color: Color, variant: AlertVariant) -> String {
    match variant {
        AlertVariant::Solid => "fill-white".to_owned(),
        _ => format!("fill-{color}-400"),
    }
}

/// Background and text of an avatar showing initials.
pub fn avatar(color: Color, variant: AvatarVariant) -> String {
    match variant {
        AvatarVariant::Filled => format!("bg-{color}-600 text-white"),
        AvatarVariant::Soft => format!("bg-{color}-100 text-{color}-700"),
        AvatarVariant::Outline => format!("border border-{color}-300 text-{color}-700 bg-transparent"),
    }
}

// ---------------------------------------------------------------------------
// Tabs, empty state, toast
// ---------------------------------------------------------------------------

pub fn tab_active(color: Color, variant: TabVariant) -> String {
    match variant {
        TabVariant::Pills => format!("bg-{color}-600 text-white"),
        TabVariant::Bordered => format!("bg-{color}-50 text-{color}-600 border border-{color}-200"),
        TabVariant::Underline => format!("text-{color}-600 border-{color}-600"),
    }
}

pub fn empty_state_icon_background(color: Color) -> String {
    format!("bg-{color}-100")
}

pub fn empty_state_icon_color(color: Color) -> String {
    format!("text-{color}-600")
}

pub fn toast_background(color: Color) -> String {
    format!("bg-{color}-50 border-{color}-200")
}

pub fn toast_text(color: Color) -> String {
    format!("text-{color}-800")
}

pub fn toast_icon(color: Color) -> String {
    format!("text-{color}-600")
}

pub fn toast_progress(color: Color) -> String {
    format!("bg-{color}-600")
}

/// Icon shown by a toast that has no explicit icon.
pub fn toast_default_icon(color: Color) -> &'static str {
    match color {
        Color::Green => "check-circle",
        Color::Red => "x-circle",
        Color::Yellow | Color::Amber | Color::Orange => "exclamation-triangle",
        _ => "information-circle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Token;

    #[test]
    fn error_state_overrides_colour() {
        assert_eq!(focus(Color::Indigo, false), "focus:border-indigo-400 focus:ring-indigo-400");
        assert_eq!(focus(Color::Indigo, true), "focus:border-red-400 focus:ring-red-400");
        assert_eq!(border(Color::Slate, true), "border-red-300");
        assert_eq!(active_border(Color::Teal, false), "border-teal-400 ring-1 ring-teal-400");
    }

    #[test]
    fn accent_shade_depends_on_hue() {
        assert_eq!(checkbox_accent(Color::Green), "accent-green-600");
        assert_eq!(checkbox_accent(Color::Blue), "accent-blue-500");
    }

    #[test]
    fn size_scales_per_control() {
        assert_eq!(size(Size::Normal, Control::Button), "text-sm px-4 py-2");
        assert_eq!(size(Size::Normal, Control::Input), "text-sm px-3 py-2");
        assert_eq!(size(Size::Small, Control::Input), "text-xs px-2 py-1");
        assert_eq!(size(Size::Large, Control::Button), "text-lg px-6 py-3");
    }

    #[test]
    fn button_variants() {
        assert_eq!(
            button(Color::Indigo, ButtonVariant::Filled),
            "bg-indigo-50 text-indigo-600 hover:bg-indigo-100 border border-transparent"
        );
        assert_eq!(
            button(Color::Red, ButtonVariant::Link),
            "bg-transparent text-red-600 hover:underline hover:underline-offset-2"
        );
    }

    #[test]
    fn alert_icon_on_solid_is_white() {
        assert_eq!(alert_icon(Color::Blue, AlertVariant::Solid), "fill-white");
        assert_eq!(alert_icon(Color::Blue, AlertVariant::Outline), "fill-blue-400");
    }

    #[test]
    fn toast_icons_by_colour() {
        assert_eq!(toast_default_icon(Color::Green), "check-circle");
        assert_eq!(toast_default_icon(Color::Red), "x-circle");
        assert_eq!(toast_default_icon(Color::Amber), "exclamation-triangle");
        assert_eq!(toast_default_icon(Color::Sky), "information-circle");
    }

    #[test]
    fn composition_is_total_and_deterministic() {
        for &color in Color::ALL {
            for &variant in ButtonVariant::ALL {
                let first = button(color, variant);
                assert!(!first.is_empty());
                assert_eq!(first, button(color, variant));
            }
            for &variant in BadgeVariant::ALL {
                assert_eq!(badge(color, variant), badge(color, variant));
            }
            for &variant in TabVariant::ALL {
                assert!(tab_active(color, variant).contains(color.as_str()));
            }
        }
    }

    #[test]
    fn state_classes() {
        assert_eq!(state(ControlState::Disabled), "opacity-50 cursor-not-allowed bg-slate-50");
        assert_eq!(state(ControlState::Idle), "");
    }
}
