//! Pieces shared by the form components: labels, help text, error
//! messages and field-updated events.

use crate::components::IconSize;
use crate::event::FieldUpdated;
use crate::markup::Element;
use crate::state::StateValue;
use crate::style::{compose, ClassList, Color, Control, ControlState, IconPosition, Size};

/// `<label>` above a form control, with a required marker.
pub fn field_label(label: &str, for_id: &str, required: bool) -> Option<Element> {
    if label.is_empty() {
        return None;
    }
    Some(
        Element::new("label")
            .attr_if(!for_id.is_empty(), "for", for_id)
            .class("block text-sm font-medium text-slate-700 mb-1")
            .text(label)
            .child_opt(required.then(|| Element::new("span").class("text-red-500 ml-1").text("*"))),
    )
}

pub fn help_text(text: &str) -> Option<Element> {
    (!text.is_empty()).then(|| Element::new("p").class("mt-1 text-xs text-slate-500").text(text))
}

pub fn error_message(text: &str) -> Option<Element> {
    (!text.is_empty()).then(|| {
        Element::new("p")
            .class("mt-1 text-xs text-red-600")
            .attr("role", "alert")
            .text(text)
    })
}

/// Build the `field-updated` event for a field's committed value.
pub fn field_updated(field: &str, value: &StateValue, error: &str, kind: Option<&str>) -> FieldUpdated {
    FieldUpdated {
        field: field.to_owned(),
        value: value.to_json(),
        error: error.to_owned(),
        is_valid: error.is_empty(),
        kind: kind.map(str::to_owned),
    }
}

// ---------------------------------------------------------------------------
// Text controls (input, textarea)
// ---------------------------------------------------------------------------

/// What a text control's classes depend on.
#[derive(Debug, Clone, Copy)]
pub struct TextControl {
    pub size: Size,
    pub color: Color,
    pub has_error: bool,
    /// Icon side, when the control shows an icon.
    pub icon: Option<IconPosition>,
    pub disabled: bool,
    pub readonly: bool,
}

impl TextControl {
    pub fn classes(&self) -> ClassList {
        ClassList::new()
            .with("w-full bg-white rounded-md focus:outline-none focus:ring-1 transition-all duration-200 ease-in-out")
            .with(compose::size(self.size, Control::Input))
            .with("border")
            .with(&compose::border(Color::Slate, self.has_error))
            .with(&compose::focus(self.color, self.has_error))
            .with(self.icon.map_or("", |position| icon_padding(position, self.size)))
            .with_if(self.disabled, compose::state(ControlState::Disabled))
            .with_if(self.readonly, compose::state(ControlState::Readonly))
    }
}

/// Padding that leaves room for an icon inside a text control.
pub fn icon_padding(position: IconPosition, size: Size) -> &'static str {
    match (position, size) {
        (IconPosition::Left, Size::Small) => "pl-8 pr-3",
        (IconPosition::Left, Size::Large) => "pl-12 pr-4",
        (IconPosition::Right, Size::Small) => "pl-3 pr-8",
        (IconPosition::Right, Size::Large) => "pl-4 pr-12",
        (IconPosition::Right, Size::Normal) => "pl-3 pr-10",
        (IconPosition::Left, Size::Normal) => "pl-10 pr-3",
    }
}

/// Horizontal offset of an icon inside a text control.
pub fn icon_offset(position: IconPosition, size: Size) -> &'static str {
    match (position, size) {
        (IconPosition::Left, Size::Small) => "left-2",
        (IconPosition::Right, Size::Small) => "right-2",
        (IconPosition::Right, _) => "right-3",
        (IconPosition::Left, _) => "left-3",
    }
}

/// Icon size matching a control size.
pub fn icon_size(size: Size) -> IconSize {
    match size {
        Size::Small => IconSize::Four,
        Size::Large => IconSize::Six,
        Size::Normal => IconSize::Five,
    }
}

/// First non-empty candidate, used for field names that fall back to the
/// label or id.
pub fn first_non_empty<'a>(candidates: &[&'a str], default: &'a str) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|c| !c.is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_with_required_marker() {
        let html = field_label("Email", "email", true).unwrap().render();
        assert_eq!(
            html,
            "<label class=\"block text-sm font-medium text-slate-700 mb-1\" for=\"email\">Email<span class=\"text-red-500 ml-1\">*</span></label>"
        );
        assert!(field_label("", "email", true).is_none());
    }

    #[test]
    fn label_without_for() {
        let html = field_label("Name", "", false).unwrap().render();
        assert_eq!(html, "<label class=\"block text-sm font-medium text-slate-700 mb-1\">Name</label>");
    }

    #[test]
    fn help_and_error() {
        assert!(help_text("").is_none());
        assert_eq!(
            error_message("Bad").unwrap().render(),
            "<p class=\"mt-1 text-xs text-red-600\" role=\"alert\">Bad</p>"
        );
    }

    #[test]
    fn field_updated_validity_follows_error() {
        let event = field_updated("q", &StateValue::from("x"), "", None);
        assert!(event.is_valid);
        let event = field_updated("q", &StateValue::from("x"), "nope", Some("radio"));
        assert!(!event.is_valid);
        assert_eq!(event.kind.as_deref(), Some("radio"));
    }

    #[test]
    fn text_control_classes_with_icon_and_error() {
        let control = TextControl {
            size: Size::Normal,
            color: Color::Indigo,
            has_error: true,
            icon: Some(IconPosition::Right),
            disabled: false,
            readonly: true,
        };
        assert_eq!(
            control.classes().to_string(),
            "w-full bg-white rounded-md focus:outline-none focus:ring-1 transition-all duration-200 ease-in-out \
             text-sm px-3 py-2 border border-red-300 focus:border-red-400 focus:ring-red-400 pl-3 pr-10 \
             bg-slate-50 cursor-default"
        );
    }

    #[test]
    fn icon_geometry() {
        assert_eq!(icon_padding(IconPosition::Left, Size::Large), "pl-12 pr-4");
        assert_eq!(icon_offset(IconPosition::Right, Size::Large), "right-3");
        assert_eq!(icon_size(Size::Small), IconSize::Four);
    }

    #[test]
    fn first_non_empty_falls_back() {
        assert_eq!(first_non_empty(&["", "label"], "field"), "label");
        assert_eq!(first_non_empty(&["", ""], "field"), "field");
    }
}
