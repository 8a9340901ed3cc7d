//! Checkbox and radio groups.
//!
//! One component covers both input types. A checkbox group holds a list of
//! checked keys and `updateValue(key)` toggles membership; a radio group holds
//! a single key and `updateValue(key)` replaces it. Without options the
//! component renders one labelled input.

use std::any::Any;

use tracing::{debug, trace};

use crate::action::{ActionArg, ActionCall};
use crate::component::common;
use crate::component::{text_arg, Base, Component};
use crate::error::Result;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props, StateValue};
use crate::style::{compose, token_enum, ClassList, Color, Size, Token};

token_enum! {
    pub enum ChoiceType {
        Checkbox => "checkbox",
        Radio => "radio",
    }
    default Checkbox
}

token_enum! {
    pub enum Orientation {
        Vertical => "vertical",
        Horizontal => "horizontal",
    }
    default Vertical
}

/// One option of the group: the key submitted and the label shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub key: String,
    pub label: String,
}

/// Options arrive as a `key => label` map, or as a list of `{value, label}`
/// maps or bare strings.
fn choices_from(options: &StateValue) -> Vec<Choice> {
    match options {
        StateValue::Map(map) => map
            .iter()
            .map(|(key, label)| Choice {
                key: key.clone(),
                label: label.get_text("label").unwrap_or_else(|| match label {
                    StateValue::Map(_) => key.clone(),
                    other => other.to_text(),
                }),
            })
            .collect(),
        StateValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                StateValue::Map(_) => {
                    let key = item.get_text("value").unwrap_or_else(|| index.to_string());
                    let label = item.get_text("label").unwrap_or_else(|| key.clone());
                    Choice { key, label }
                }
                other => Choice {
                    key: other.to_text(),
                    label: other.to_text(),
                },
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// A checkbox group's value is a list; a radio group's a string.
fn initial_value(value: Option<&StateValue>, kind: ChoiceType) -> StateValue {
    let value = value.cloned().unwrap_or_default();
    match (kind, value) {
        (ChoiceType::Checkbox, StateValue::List(items)) => {
            StateValue::List(items.iter().map(|i| StateValue::from(i.to_text())).collect())
        }
        (ChoiceType::Checkbox, other) if other.is_empty() => StateValue::empty_list(),
        (ChoiceType::Checkbox, other) => vec![other.to_text()].into(),
        (ChoiceType::Radio, StateValue::List(items)) => {
            items.first().map(StateValue::to_text).unwrap_or_default().into()
        }
        (ChoiceType::Radio, other) => other.to_text().into(),
    }
}

pub struct CheckboxRadio {
    base: Base,
}

impl CheckboxRadio {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "checkbox-radio", id);
        let s = &mut base.state;
        s.declare("label", Field::new(""))?;
        s.declare("name", Field::new(format!("checkbox-{id}")))?;
        s.declare("id", Field::new(format!("checkbox_id_{id}")))?;
        s.declare("disabled", Field::new(false))?;
        s.declare("required", Field::new(false))?;
        s.declare("helpText", Field::new(""))?;
        s.declare("errorMessage", Field::new(""))?;
        s.declare("inline", Field::new(false))?;
        s.declare("type", Field::token(ChoiceType::Checkbox))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("color", Field::token(Color::Indigo))?;
        s.declare("orientation", Field::token(Orientation::Vertical))?;
        s.declare("rules", Field::new("").protected())?;
        base.apply(&props)?;

        // Both shapes depend on the props: options may be a map or a list,
        // and the value type follows `type`.
        let options = props
            .get("options")
            .filter(|o| matches!(o, StateValue::List(_) | StateValue::Map(_)))
            .cloned()
            .unwrap_or_else(StateValue::empty_list);
        let kind = base.state.token::<ChoiceType>("type");
        base.state.declare("options", Field::new(options))?;
        base.state
            .declare("value", Field::new(initial_value(props.get("value"), kind)))?;
        Ok(Self { base })
    }

    pub fn choice_type(&self) -> ChoiceType {
        self.base.state.token("type")
    }

    pub fn choices(&self) -> Vec<Choice> {
        self.base
            .state
            .get("options")
            .map(choices_from)
            .unwrap_or_default()
    }

    /// Checked keys: the list for a checkbox group, the one key for a radio.
    pub fn checked(&self) -> Vec<String> {
        let s = &self.base.state;
        match self.choice_type() {
            ChoiceType::Checkbox => s.list("value").iter().map(StateValue::to_text).collect(),
            ChoiceType::Radio if s.str("value").is_empty() => Vec::new(),
            ChoiceType::Radio => vec![s.str("value").to_owned()],
        }
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.checked().iter().any(|k| k == key)
    }

    /// Toggle (checkbox) or pick (radio) the option `key`.
    pub fn update_value(&mut self, key: &str) -> Result<()> {
        if self.base.state.bool("disabled") {
            trace!(id = %self.base.id, "disabled, ignoring updateValue");
            return Ok(());
        }
        match self.choice_type() {
            ChoiceType::Checkbox => {
                let mut keys = self.checked();
                match keys.iter().position(|k| k == key) {
                    Some(index) => {
                        keys.remove(index);
                    }
                    None => keys.push(key.to_owned()),
                }
                self.base.state.set("value", keys)?;
            }
            ChoiceType::Radio => self.base.state.set("value", key)?,
        }
        self.validate()?;

        let s = &self.base.state;
        let event = common::field_updated(
            common::first_non_empty(&[s.str("name"), s.str("id")], ""),
            s.get("value").unwrap_or(&StateValue::empty_str()),
            s.str("errorMessage"),
            Some(self.choice_type().as_str()),
        );
        self.base.emit(event);
        Ok(())
    }

    fn validate(&mut self) -> Result<()> {
        let s = &self.base.state;
        let rules = s.str("rules");
        if rules.is_empty() {
            return Ok(());
        }
        let field = common::first_non_empty(&[s.str("name"), s.str("label")], "field");
        let value = self.checked().join(",");

        let error = if self.choice_type() == ChoiceType::Checkbox
            && value.is_empty()
            && rules.contains("required")
        {
            self.base.trans("validation.required")
        } else {
            self.base
                .ctx
                .validate_current_field(field, &value, rules)
                .unwrap_or_default()
        };
        debug!(field, valid = error.is_empty(), "choice validated");
        self.base.state.set("errorMessage", error)
    }

    // -- Rendering --------------------------------------------------------

    fn input_classes(&self) -> ClassList {
        let s = &self.base.state;
        let size = match s.token::<Size>("size") {
            Size::Small => "h-3 w-3",
            Size::Large => "h-6 w-6",
            Size::Normal => "h-4 w-4",
        };
        ClassList::new()
            .with("transition-all duration-200")
            .with(if self.choice_type() == ChoiceType::Radio { "rounded-full" } else { "rounded" })
            .with(size)
            .with(&compose::checkbox_accent(s.token("color")))
            .with_if(s.bool("disabled"), "opacity-50 cursor-not-allowed")
    }

    fn label_classes(&self) -> ClassList {
        let s = &self.base.state;
        ClassList::new()
            .with("font-medium text-slate-700 cursor-pointer")
            .with_if(s.bool("disabled"), "opacity-50 cursor-not-allowed")
            .with(match s.token::<Size>("size") {
                Size::Small => "text-xs",
                Size::Large => "text-base",
                Size::Normal => "text-sm",
            })
    }

    fn required_mark(&self) -> Option<Element> {
        let s = &self.base.state;
        (s.bool("required") && !s.bool("disabled"))
            .then(|| Element::new("span").class("text-red-500").text("*"))
    }

    fn option_row(&self, input: Element, input_id: &str, label: Element) -> Element {
        let gap = if self.base.state.token::<Size>("size") == Size::Small { "gap-1" } else { "gap-2" };
        Element::new("div")
            .class("flex items-center")
            .class(gap)
            .child(input)
            .child(Element::new("div").class("flex-1").child(label.attr("for", input_id)))
    }

    fn input(&self, id: &str, name: &str, value: Option<&str>, key: &str) -> Element {
        let s = &self.base.state;
        Element::new("input")
            .attr("type", self.choice_type().as_str())
            .id(id)
            .attr("name", name)
            .attr_if(value.is_some(), "value", value.unwrap_or_default())
            .classes(&self.input_classes())
            .flag_if(self.is_checked(key), "checked")
            .flag_if(s.bool("disabled"), "disabled")
            .attr("data-action-change", ActionCall::new("updateValue").arg(key).to_string())
    }

    fn options(&self, choices: &[Choice]) -> Element {
        let s = &self.base.state;
        let horizontal = s.bool("inline") || s.token::<Orientation>("orientation") == Orientation::Horizontal;
        let radio = self.choice_type() == ChoiceType::Radio;
        Element::new("div")
            .class(if horizontal { "flex flex-wrap gap-4" } else { "space-y-2" })
            .children(choices.iter().map(|choice| {
                let input_id = format!("{}_{}", s.str("id"), choice.key);
                let (name, value) = if radio {
                    (s.str("name"), Some(choice.key.as_str()))
                } else {
                    (choice.key.as_str(), None)
                };
                let label = Element::new("label")
                    .classes(&self.label_classes())
                    .text(choice.label.as_str());
                self.option_row(self.input(&input_id, name, value, &choice.key), &input_id, label)
            }))
    }

    fn single_option(&self) -> Element {
        let s = &self.base.state;
        let key = match self.choice_type() {
            ChoiceType::Checkbox => self.checked().into_iter().next(),
            ChoiceType::Radio => Some(s.str("value").to_owned()).filter(|v| !v.is_empty()),
        }
        .unwrap_or_else(|| "on".to_owned());
        let label = Element::new("label")
            .classes(&self.label_classes())
            .text(s.str("label"))
            .child_opt(self.required_mark());
        self.option_row(self.input(s.str("id"), s.str("name"), Some(&key), &key), s.str("id"), label)
    }
}

impl Component for CheckboxRadio {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let choices = self.choices();
        let body = if choices.is_empty() {
            self.single_option()
        } else {
            self.options(&choices)
        };
        let legend = (!choices.is_empty() && !s.str("label").is_empty()).then(|| {
            Element::new("legend")
                .class("block text-sm font-medium text-slate-700 mb-2")
                .text(s.str("label"))
                .child_opt(self.required_mark())
        });
        Element::new("fieldset")
            .class("ui-checkbox-radio space-y-1")
            .child_opt(legend)
            .child(body)
            .child_opt(common::help_text(s.str("helpText")))
            .child_opt(common::error_message(s.str("errorMessage")))
    }

    fn dispatch(&mut self, action: &str, args: &[ActionArg]) -> Result<()> {
        match action {
            "updateValue" => self.update_value(&text_arg(action, args, 0)?),
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
