//! Select / dropdown.
//!
//! A closed select shows the current selection (a label, or badges when
//! `multiple`). `toggleDropdown` opens it with a cleared search;
//! `closeDropdown`, a second toggle, or picking an option in single mode close
//! it again. While open, `updateSearch` narrows `filteredOptions` to the
//! options whose label contains the query, ignoring case.
//!
//! Options are bare strings (value and label alike) or `{value, label}` maps.
//! The value is a string for a single select and an ordered, duplicate-free
//! list for a multiple one.

use std::any::Any;

use tracing::{debug, trace};

use super::icon::{Icon, IconSize};
use crate::action::{ActionArg, ActionCall};
use crate::component::common;
use crate::component::{optional_text_arg, text_arg, Base, Component};
use crate::error::Result;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props, StateValue};
use crate::style::{
    compose, BadgeVariant, ClassList, Color, Control, ControlState, IconPosition, Size,
};

const REMOVE_PATH: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";
const CHECK_PATH: &str = "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z";
const CHEVRON_PATH: &str = "M19 9l-7 7-7-7";

// ---------------------------------------------------------------------------
// Options and value normalization
// ---------------------------------------------------------------------------

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Read an option from state: a bare scalar or a `{value, label}` map.
    /// A map without a label is labelled by its value.
    pub fn from_state(option: &StateValue) -> Option<Self> {
        match option {
            StateValue::Map(_) => {
                let value = option.get("value").map(StateValue::to_text).unwrap_or_default();
                let label = option.get_text("label").unwrap_or_else(|| value.clone());
                Some(Self { value, label })
            }
            StateValue::List(_) => None,
            scalar => {
                let text = scalar.to_text();
                Some(Self::new(text.clone(), text))
            }
        }
    }
}

fn collapse_nested(value: &StateValue) -> &StateValue {
    match value {
        StateValue::List(outer) if outer.len() == 1 => match &outer[0] {
            StateValue::List(inner) if inner.len() == 1 => collapse_nested(&inner[0]),
            _ => value,
        },
        _ => value,
    }
}

/// Undo serialization artifacts in a submitted value.
///
/// Nested one-element lists collapse to their scalar (`[["x"]]` becomes
/// `"x"`); for a single select a one-element list becomes its element.
pub fn normalize_value(value: &StateValue, multiple: bool) -> StateValue {
    match collapse_nested(value) {
        StateValue::List(items) if !multiple && items.len() == 1 => items[0].clone(),
        other => other.clone(),
    }
}

/// Scalar texts of `value`, descending into nested lists.
fn flatten_texts(value: &StateValue) -> Vec<String> {
    match value {
        StateValue::List(items) => items.iter().flat_map(flatten_texts).collect(),
        other => vec![other.to_text()],
    }
}

/// Normalize a value into the select's value type: a string, or a
/// duplicate-free list of strings when `multiple`.
fn selection_value(value: &StateValue, multiple: bool) -> StateValue {
    let value = normalize_value(value, multiple);
    if !multiple {
        let text = match value {
            StateValue::List(items) => items.first().map(StateValue::to_text).unwrap_or_default(),
            other => other.to_text(),
        };
        return StateValue::from(text);
    }
    let items: Vec<String> = match value {
        StateValue::List(items) => items.iter().flat_map(flatten_texts).collect(),
        StateValue::Str(text) if text.is_empty() => Vec::new(),
        other => vec![other.to_text()],
    };
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique.into()
}

// ---------------------------------------------------------------------------
// Select
// ---------------------------------------------------------------------------

pub struct Select {
    base: Base,
}

impl Select {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "select", id);
        let search_placeholder = base.trans("select.search_placeholder");
        let max_height = i64::try_from(ctx.config().select_max_height).unwrap_or(i64::MAX);
        let s = &mut base.state;
        s.declare("label", Field::new(""))?;
        s.declare("placeholder", Field::new(""))?;
        s.declare("name", Field::new(format!("select-{id}")))?;
        s.declare("id", Field::new(format!("id_select-{id}")))?;
        s.declare("iconName", Field::new(""))?;
        s.declare("block", Field::new(false))?;
        s.declare("disabled", Field::new(false))?;
        s.declare("required", Field::new(false))?;
        s.declare("readonly", Field::new(false))?;
        s.declare("multiple", Field::new(false))?;
        s.declare("options", Field::new(StateValue::empty_list()))?;
        s.declare("searchable", Field::new(true))?;
        s.declare("searchPlaceholder", Field::new(search_placeholder))?;
        s.declare("searchQuery", Field::new(""))?;
        s.declare("isOpen", Field::new(false))?;
        s.declare("filteredOptions", Field::new(StateValue::empty_list()))?;
        s.declare("maxHeight", Field::new(max_height))?;
        s.declare("helpText", Field::new(""))?;
        s.declare("errorMessage", Field::new(""))?;
        s.declare("color", Field::token(Color::Indigo))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("iconPosition", Field::token(IconPosition::Left))?;
        s.declare("rules", Field::new("").protected())?;
        base.apply(&props)?;

        // The value's type depends on `multiple`, so it is declared once the
        // props are in.
        let multiple = base.state.bool("multiple");
        let initial = props.get("value").cloned().unwrap_or_default();
        base.state
            .declare("value", Field::new(selection_value(&initial, multiple)))?;

        let mut select = Self { base };
        select.refresh_filtered()?;
        Ok(select)
    }

    pub fn is_multiple(&self) -> bool {
        self.base.state.bool("multiple")
    }

    pub fn is_open(&self) -> bool {
        self.base.state.bool("isOpen")
    }

    fn is_locked(&self) -> bool {
        self.base.state.bool("disabled") || self.base.state.bool("readonly")
    }

    /// All options, in the order supplied.
    pub fn options(&self) -> Vec<SelectOption> {
        self.base
            .state
            .list("options")
            .iter()
            .filter_map(SelectOption::from_state)
            .collect()
    }

    /// The options matching the current search.
    pub fn filtered_options(&self) -> Vec<SelectOption> {
        self.base
            .state
            .list("filteredOptions")
            .iter()
            .filter_map(SelectOption::from_state)
            .collect()
    }

    /// Selected values in selection order.
    pub fn selected_values(&self) -> Vec<String> {
        let value = normalize_value(
            self.base.state.get("value").unwrap_or(&StateValue::empty_str()),
            self.is_multiple(),
        );
        match value {
            StateValue::List(items) if self.is_multiple() => {
                items.iter().map(StateValue::to_text).collect()
            }
            StateValue::List(_) => Vec::new(),
            other if other.is_empty() => Vec::new(),
            other => vec![other.to_text()],
        }
    }

    /// Selected options, in the order of the option list.
    pub fn selected_options(&self) -> Vec<SelectOption> {
        let selected = self.selected_values();
        self.options()
            .into_iter()
            .filter(|option| selected.contains(&option.value))
            .collect()
    }

    // -- Actions ----------------------------------------------------------

    /// Pick an option. Toggles membership when `multiple`, otherwise replaces
    /// the value and closes the dropdown.
    pub fn select_option(&mut self, value: &str) -> Result<()> {
        if self.is_locked() {
            trace!(id = %self.base.id, "select is locked, ignoring selectOption");
            return Ok(());
        }
        if self.is_multiple() {
            let mut values = self.selected_values();
            match values.iter().position(|v| v == value) {
                Some(index) => {
                    values.remove(index);
                }
                None => values.push(value.to_owned()),
            }
            self.base.state.set("value", values)?;
        } else {
            self.base.state.set("value", value)?;
            self.base.state.set("isOpen", false)?;
        }
        self.commit()
    }

    /// Drop one value from a multiple selection.
    pub fn remove_badge(&mut self, value: &str) -> Result<()> {
        if self.is_locked() || !self.is_multiple() {
            return Ok(());
        }
        let mut values = self.selected_values();
        let Some(index) = values.iter().position(|v| v == value) else {
            trace!(id = %self.base.id, value, "badge not selected");
            return Ok(());
        };
        values.remove(index);
        self.base.state.set("value", values)?;
        self.commit()
    }

    pub fn toggle_dropdown(&mut self) -> Result<()> {
        if self.is_locked() {
            return Ok(());
        }
        let open = !self.is_open();
        self.base.state.set("isOpen", open)?;
        if open {
            self.base.state.set("searchQuery", "")?;
            self.refresh_filtered()?;
        }
        Ok(())
    }

    pub fn close_dropdown(&mut self) -> Result<()> {
        self.base.state.set("isOpen", false)?;
        self.base.state.set("searchQuery", "")?;
        self.refresh_filtered()
    }

    pub fn update_search(&mut self, query: &str) -> Result<()> {
        self.base.state.set("searchQuery", query)?;
        self.refresh_filtered()
    }

    fn refresh_filtered(&mut self) -> Result<()> {
        let query = self.base.state.str("searchQuery").to_lowercase();
        let options = self.base.state.list("options");
        let filtered: Vec<StateValue> = if query.is_empty() {
            options.to_vec()
        } else {
            options
                .iter()
                .filter(|option| {
                    SelectOption::from_state(option)
                        .is_some_and(|o| o.label.to_lowercase().contains(&query))
                })
                .cloned()
                .collect()
        };
        self.base.state.set("filteredOptions", filtered)
    }

    /// Validate the committed selection and announce it.
    fn commit(&mut self) -> Result<()> {
        let s = &self.base.state;
        if !s.str("rules").is_empty() {
            let field = common::first_non_empty(&[s.str("name"), s.str("label")], "field");
            let value = s.get("value").map(StateValue::to_text).unwrap_or_default();
            let error = self
                .base
                .ctx
                .validate_current_field(field, &value, s.str("rules"))
                .unwrap_or_default();
            debug!(field, valid = error.is_empty(), "select validated");
            self.base.state.set("errorMessage", error)?;
        }
        let s = &self.base.state;
        let event = common::field_updated(
            common::first_non_empty(&[s.str("name"), s.str("id")], ""),
            s.get("value").unwrap_or(&StateValue::empty_str()),
            s.str("errorMessage"),
            None,
        );
        self.base.emit(event);
        Ok(())
    }

    // -- Rendering --------------------------------------------------------

    fn trigger_classes(&self) -> ClassList {
        let s = &self.base.state;
        let size: Size = s.token("size");
        let color: Color = s.token("color");
        let has_error = !s.str("errorMessage").is_empty();
        let has_icon = !s.str("iconName").is_empty();
        let left = s.token::<IconPosition>("iconPosition") == IconPosition::Left;
        let padding = match (size, left) {
            (Size::Small, true) => "pl-7",
            (Size::Small, false) => "pr-2",
            (Size::Large, true) => "pl-10",
            (Size::Large, false) => "pr-4",
            (Size::Normal, true) => "pl-9",
            (Size::Normal, false) => "pr-3",
        };

        let mut classes = ClassList::new()
            .with("bg-white rounded-md shadow-sm focus:outline-none focus:ring-1 transition-colors duration-200 cursor-pointer relative transition-all ease-in-out")
            .with(compose::size(size, Control::Input))
            .with_if(has_icon, padding);
        if self.is_open() && !self.is_locked() {
            classes.push(&compose::active_border(color, has_error));
        } else {
            classes.push("border");
            classes.push(&compose::border(Color::Slate, has_error));
            classes.push(&compose::focus(color, has_error));
        }
        classes
            .with_if(s.bool("disabled"), compose::state(ControlState::Disabled))
            .with_if(s.bool("readonly"), compose::state(ControlState::Readonly))
            .with("flex items-center justify-between")
    }

    fn icon(&self) -> Option<Element> {
        let s = &self.base.state;
        let name = s.str("iconName");
        if name.is_empty() {
            return None;
        }
        let size: Size = s.token("size");
        let offset = match (s.token::<IconPosition>("iconPosition"), size) {
            (IconPosition::Left, Size::Small) => "left-2",
            (IconPosition::Right, Size::Small) => "right-8",
            (IconPosition::Right, Size::Large) => "right-10",
            (IconPosition::Right, Size::Normal) => "right-9",
            (IconPosition::Left, _) => "left-3",
        };
        let icon_size = if size == Size::Small { IconSize::Four } else { IconSize::Five };
        Some(Icon::inline(
            &self.base.ctx,
            name,
            Default::default(),
            icon_size,
            &format!("absolute top-1/2 transform -translate-y-1/2 {offset} text-slate-400"),
        ))
    }

    fn selected_content(&self) -> Element {
        let selected = self.selected_options();
        let Some(first) = selected.first() else {
            return Element::new("span")
                .class("text-slate-400")
                .text(self.base.state.str("placeholder"));
        };
        if !self.is_multiple() {
            return Element::new("span").class("text-slate-900").text(first.label.as_str());
        }
        let badge = compose::badge(self.base.state.token("color"), BadgeVariant::Filled);
        Element::new("div")
            .class("flex flex-wrap gap-1")
            .children(selected.iter().map(|option| {
                Element::new("span")
                    .class("inline-flex items-center gap-1 px-2 py-0.5 rounded text-xs font-medium border")
                    .class(&badge)
                    .text(option.label.as_str())
                    .child(
                        Element::new("button")
                            .attr("type", "button")
                            .class("ml-1 text-current hover:text-red-600 focus:outline-none")
                            .attr(
                                "data-action-click",
                                ActionCall::new("removeBadge").arg(option.value.as_str()).to_string(),
                            )
                            .child(solid_svg("w-3 h-3", REMOVE_PATH)),
                    )
            }))
    }

    fn search_input(&self) -> Option<Element> {
        let s = &self.base.state;
        if !s.bool("searchable") {
            return None;
        }
        Some(
            Element::new("div").class("p-2 border-b border-slate-200").child(
                Element::new("input")
                    .attr("type", "text")
                    .attr("placeholder", s.str("searchPlaceholder"))
                    .attr("value", s.str("searchQuery"))
                    .class("w-full px-2 py-1 text-sm border border-slate-300 rounded focus:outline-none focus:ring-1")
                    .class(&compose::focus(s.token("color"), !s.str("errorMessage").is_empty()))
                    .attr("data-action-change", ActionCall::new("updateSearch").to_string())
                    .flag_if(true, "data-search-input")
                    .attr("autocomplete", "off"),
            ),
        )
    }

    fn option_list(&self) -> Element {
        let filtered = self.filtered_options();
        if filtered.is_empty() {
            return Element::new("div")
                .class("p-3 text-sm text-slate-500 text-center")
                .text(self.base.trans("select.no_options"));
        }
        let selected = self.selected_values();
        let multiple = self.is_multiple();
        Element::new("ul").children(filtered.into_iter().map(|option| {
            let is_selected = selected.contains(&option.value);
            Element::new("li")
                .class("flex items-center justify-between px-3 py-2 cursor-pointer")
                .class(if is_selected {
                    "bg-slate-100 text-slate-900"
                } else {
                    "text-slate-700 hover:bg-slate-50"
                })
                .attr("data-action-click", ActionCall::new("selectOption").arg(option.value.as_str()).to_string())
                .attr("data-search-text", option.label.as_str())
                .child(Element::new("span").class("text-sm").text(option.label.as_str()))
                .child_opt((multiple && is_selected).then(|| solid_svg("w-4 h-4 text-green-600", CHECK_PATH)))
        }))
    }

    fn dropdown(&self) -> Option<Element> {
        if !self.is_open() {
            return None;
        }
        let s = &self.base.state;
        Some(
            Element::new("div")
                .class("absolute z-50 w-full mt-1 bg-white border border-slate-300 rounded-md shadow-lg")
                .flag_if(s.bool("searchable"), "data-live-search")
                .flag_if(true, "data-search-container")
                .attr("data-search-items", "li")
                .attr("data-search-fields", "data-search-text,span")
                .attr("data-search-no-results-message", self.base.trans("select.no_results"))
                .attr("data-search-hidden-class", "hidden")
                .attr("data-close-outside", "self")
                .attr("data-close-outside-ignore", format!("#{}", s.str("id")))
                .attr("data-close-outside-action", ActionCall::new("closeDropdown").to_string())
                .child_opt(self.search_input())
                .child(
                    Element::new("div")
                        .class("max-h-48 overflow-y-auto")
                        .attr("style", format!("max-height: {}px", s.int("maxHeight")))
                        .attr("data-save-scroll", "dropdown-options")
                        .child(self.option_list()),
                ),
        )
    }
}

fn solid_svg(class: &str, path: &str) -> Element {
    Element::new("svg")
        .class(class)
        .attr("fill", "currentColor")
        .attr("viewBox", "0 0 20 20")
        .child(
            Element::new("path")
                .attr("fill-rule", "evenodd")
                .attr("d", path)
                .attr("clip-rule", "evenodd"),
        )
}

impl Component for Select {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let required = s.bool("required") && !s.bool("disabled");
        let chevron = Element::new("svg")
            .class("w-4 h-4 text-slate-400 transition-transform duration-200")
            .class_if(self.is_open(), "rotate-180")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("viewBox", "0 0 24 24")
            .child(
                Element::new("path")
                    .attr("stroke-linecap", "round")
                    .attr("stroke-linejoin", "round")
                    .attr("stroke-width", "2")
                    .attr("d", CHEVRON_PATH),
            );

        Element::new("div")
            .class("ui-select space-y-1 relative")
            .class(if s.bool("block") { "w-full" } else { "max-w-sm min-w-[200px]" })
            .child_opt(common::field_label(s.str("label"), s.str("id"), required))
            .child(
                Element::new("div")
                    .class("relative")
                    .child(
                        Element::new("div")
                            .classes(&self.trigger_classes())
                            .id(s.str("id"))
                            .attr("data-action-click", ActionCall::new("toggleDropdown").to_string())
                            .attr("tabindex", "0")
                            .attr("aria-expanded", self.is_open().to_string())
                            .child(Element::new("div").class("flex-1 min-w-0").child(self.selected_content()))
                            .child_opt(self.icon())
                            .child(Element::new("div").class("flex items-center").child(chevron)),
                    )
                    .child_opt(self.dropdown()),
            )
            .child_opt(common::help_text(s.str("helpText")))
            .child_opt(common::error_message(s.str("errorMessage")))
    }

    fn dispatch(&mut self, action: &str, args: &[ActionArg]) -> Result<()> {
        match action {
            "selectOption" => self.select_option(&text_arg(action, args, 0)?),
            "removeBadge" => self.remove_badge(&text_arg(action, args, 0)?),
            "toggleDropdown" => self.toggle_dropdown(),
            "closeDropdown" => self.close_dropdown(),
            "updateSearch" => self.update_search(&optional_text_arg(args, 0)),
            other => Err(self.base.unknown_action(other)),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use crate::event::FieldUpdated;
    use crate::testing;
    use pretty_assertions::assert_eq;

    fn languages() -> StateValue {
        vec![
            StateValue::from([("value", "fr"), ("label", "Français")]),
            StateValue::from([("value", "en"), ("label", "English")]),
            StateValue::from([("value", "de"), ("label", "Deutsch")]),
        ]
        .into()
    }

    fn select(props: Props) -> Select {
        Select::new(&testing::context().unwrap(), "lang", props.set("options", languages())).unwrap()
    }

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn deterministic_ids() {
        let s = select(Props::new());
        assert_eq!(s.state().str("name"), "select-lang");
        assert_eq!(s.state().str("id"), "id_select-lang");
        assert_eq!(s.state().str("searchPlaceholder"), "Search...");
        assert_eq!(s.state().int("maxHeight"), 200);
    }

    #[test]
    fn single_selection_closes_and_emits() {
        let mut s = select(Props::new());
        s.toggle_dropdown().unwrap();
        assert!(s.is_open());
        s.perform("selectOption('en')").unwrap();
        assert_eq!(s.state().str("value"), "en");
        assert!(!s.is_open());

        let events = s.take_events();
        assert_eq!(events.len(), 1);
        let event = events[0].downcast_ref::<FieldUpdated>().unwrap();
        assert_eq!(event.field, "select-lang");
        assert_eq!(event.value, serde_json::json!("en"));
        assert!(event.is_valid);
    }

    #[test]
    fn search_filters_case_insensitively_and_restores() {
        let mut s = select(Props::new());
        s.toggle_dropdown().unwrap();
        s.update_search("EN").unwrap();
        assert_eq!(labels(&s.filtered_options()), vec!["English"]);
        s.update_search("ç").unwrap();
        assert_eq!(labels(&s.filtered_options()), vec!["Français"]);
        s.update_search("zz").unwrap();
        assert!(s.filtered_options().is_empty());
        assert!(s.render().contains("No options found"));
        s.update_search("").unwrap();
        assert_eq!(s.filtered_options(), s.options());
    }

    #[test]
    fn reopening_clears_search() {
        let mut s = select(Props::new());
        s.toggle_dropdown().unwrap();
        s.update_search("de").unwrap();
        s.toggle_dropdown().unwrap();
        s.toggle_dropdown().unwrap();
        assert_eq!(s.state().str("searchQuery"), "");
        assert_eq!(s.filtered_options().len(), 3);
    }

    #[test]
    fn multiple_toggle_is_an_involution() {
        let mut s = select(Props::new().set("multiple", true).set("value", vec!["de"]));
        s.select_option("fr").unwrap();
        assert_eq!(s.selected_values(), vec!["de", "fr"]);
        assert_eq!(labels(&s.selected_options()), vec!["Français", "Deutsch"]);
        s.select_option("fr").unwrap();
        assert_eq!(s.selected_values(), vec!["de"]);
        assert!(!s.is_open());
    }

    #[test]
    fn remove_badge() {
        let mut s = select(Props::new().set("multiple", true).set("value", vec!["fr", "en"]));
        s.perform("removeBadge('fr')").unwrap();
        assert_eq!(s.selected_values(), vec!["en"]);
        s.take_events();
        s.remove_badge("xx").unwrap();
        assert!(s.take_events().is_empty());

        let mut single = select(Props::new().set("value", "fr"));
        single.remove_badge("fr").unwrap();
        assert_eq!(single.state().str("value"), "fr");
    }

    #[test]
    fn locked_selects_ignore_actions() {
        for flag in ["disabled", "readonly"] {
            let mut s = select(Props::new().set(flag, true));
            s.toggle_dropdown().unwrap();
            s.select_option("fr").unwrap();
            assert!(!s.is_open());
            assert_eq!(s.state().str("value"), "");
            assert!(s.take_events().is_empty());
        }
    }

    #[test]
    fn normalizes_nested_values() {
        let nested = StateValue::from(vec![StateValue::from(vec!["x"])]);
        assert_eq!(normalize_value(&nested, false), StateValue::from("x"));
        assert_eq!(normalize_value(&nested, true), StateValue::from("x"));
        assert_eq!(normalize_value(&StateValue::from(vec!["x"]), false), StateValue::from("x"));
        assert_eq!(
            normalize_value(&StateValue::from(vec!["x"]), true),
            StateValue::from(vec!["x"])
        );

        let s = select(Props::new().set("value", nested.clone()));
        assert_eq!(s.state().str("value"), "x");
        let s = select(Props::new().set("multiple", true).set("value", nested));
        assert_eq!(s.selected_values(), vec!["x"]);
        let s = select(Props::new().set("multiple", true).set("value", "en"));
        assert_eq!(s.selected_values(), vec!["en"]);

        let wrapped = StateValue::from(vec![StateValue::from(vec!["fr", "en"])]);
        let mut s = select(Props::new().set("multiple", true).set("value", wrapped));
        assert_eq!(s.selected_values(), vec!["fr", "en"]);
        s.select_option("fr").unwrap();
        assert_eq!(s.selected_values(), vec!["en"]);
        let s = select(Props::new().set("multiple", true).set("value", vec!["en", "en"]));
        assert_eq!(s.selected_values(), vec!["en"]);
    }

    #[test]
    fn multiple_validation_joins_values() {
        let mut s = select(Props::new().set("multiple", true).set("rules", "in:fr,en"));
        s.select_option("fr").unwrap();
        assert_eq!(s.state().str("errorMessage"), "");
        s.select_option("de").unwrap();
        assert_eq!(s.state().str("errorMessage"), "The selected select lang is invalid.");
        s.select_option("de").unwrap();
        assert_eq!(s.state().str("errorMessage"), "");
    }

    #[test]
    fn renders_badges_and_check_marks() {
        let mut s = select(Props::new().set("multiple", true).set("value", vec!["en"]));
        let closed = s.render();
        assert!(closed.contains("data-action-click=\"removeBadge('en')\""));
        assert!(closed.contains("bg-indigo-100 text-indigo-800 border-indigo-200"));
        assert!(!closed.contains("data-search-container"));

        s.toggle_dropdown().unwrap();
        let open = s.render();
        assert!(open.contains("data-action-click=\"selectOption('fr')\""));
        assert!(open.contains("data-close-outside-ignore=\"#id_select-lang\""));
        assert!(open.contains("w-4 h-4 text-green-600"));
        assert!(open.contains("rotate-180"));
        assert!(open.contains("border-indigo-400 ring-1 ring-indigo-400"));
    }

    #[test]
    fn placeholder_and_single_label() {
        let s = select(Props::new().set("placeholder", "Pick one"));
        assert!(s.render().contains("<span class=\"text-slate-400\">Pick one</span>"));
        let s = select(Props::new().set("value", "de"));
        assert!(s.render().contains("<span class=\"text-slate-900\">Deutsch</span>"));
    }

    #[test]
    fn template_is_pure() {
        let s = select(Props::new().set("value", vec![StateValue::from(vec!["en"])]));
        let before = s.exposed_state();
        assert_eq!(s.render(), s.render());
        assert_eq!(s.exposed_state(), before);
    }

    #[test]
    fn string_options() {
        let ctx = testing::context().unwrap();
        let s = Select::new(&ctx, "c", Props::new().set("options", vec!["Red", "Green"])).unwrap();
        assert_eq!(s.options()[1], SelectOption::new("Green", "Green"));
    }

    #[test]
    fn invalid_size_fails() {
        let ctx = testing::context().unwrap();
        let err = Select::new(&ctx, "c", Props::new().set("size", "xl")).err().unwrap();
        assert!(matches!(err, UiError::Configuration { component, .. } if component == "select"));
    }
}
