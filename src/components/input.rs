//! Single-line text input.

use std::any::Any;

use tracing::debug;

use super::icon::Icon;
use crate::action::{ActionArg, ActionCall};
use crate::component::common::{self, TextControl};
use crate::component::{text_arg, Base, Component};
use crate::error::Result;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props};
use crate::style::{token_enum, Color, IconPosition, Size};

token_enum! {
    pub enum InputType {
        Text => "text",
        Password => "password",
        Email => "email",
        Number => "number",
        Tel => "tel",
        Url => "url",
        Date => "date",
        DatetimeLocal => "datetime-local",
        Time => "time",
        Search => "search",
        Hidden => "hidden",
    }
    default Text
}

/// A text input with label, icon, help text and validation.
///
/// When `rules` is set the input carries a debounced
/// `updateValue('<name>')` change action; the host appends the typed value.
pub struct Input {
    base: Base,
}

impl Input {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "input", id);
        let s = &mut base.state;
        s.declare("label", Field::new(""))?;
        s.declare("placeholder", Field::new(""))?;
        s.declare("value", Field::new(""))?;
        s.declare("name", Field::new(id))?;
        s.declare("id", Field::new(""))?;
        s.declare("helpText", Field::new(""))?;
        s.declare("errorMessage", Field::new(""))?;
        s.declare("block", Field::new(false))?;
        s.declare("disabled", Field::new(false))?;
        s.declare("required", Field::new(false))?;
        s.declare("readonly", Field::new(false))?;
        s.declare("iconName", Field::new(""))?;
        s.declare("color", Field::token(Color::Indigo))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("type", Field::token(InputType::Text))?;
        s.declare("iconPosition", Field::token(IconPosition::Left))?;
        s.declare("rules", Field::new("").protected())?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    /// Commit a value typed into the field, validating it when rules are set.
    pub fn update_value(&mut self, field_name: &str, value: &str) -> Result<()> {
        self.base.state.set("value", value)?;
        self.base.state.set("name", field_name)?;
        if !self.base.state.str("rules").is_empty() {
            self.validate()?;
        }
        let s = &self.base.state;
        let field = common::first_non_empty(&[s.str("name"), s.str("id")], "");
        let event = common::field_updated(
            field,
            s.get("value").unwrap_or(&Default::default()),
            s.str("errorMessage"),
            None,
        );
        self.base.emit(event);
        Ok(())
    }

    pub fn clear_error(&mut self) -> Result<()> {
        self.base.state.set("errorMessage", "")
    }

    fn validate(&mut self) -> Result<()> {
        let s = &self.base.state;
        let field = common::first_non_empty(&[s.str("name"), s.str("label")], "field");
        let error = self
            .base
            .ctx
            .validate_current_field(field, s.str("value"), s.str("rules"))
            .unwrap_or_default();
        debug!(field, valid = error.is_empty(), "input validated");
        self.base.state.set("errorMessage", error)
    }

    fn input_element(&self) -> Element {
        let s = &self.base.state;
        let kind = s.token::<InputType>("type");
        let hidden = kind == InputType::Hidden;
        let name = s.str("name");
        let disabled = s.bool("disabled");
        let validated = !s.str("rules").is_empty() && !hidden;

        let mut input = Element::new("input")
            .attr("type", kind.to_string())
            .attr("value", s.str("value"));
        if !hidden {
            let control = TextControl {
                size: s.token("size"),
                color: s.token("color"),
                has_error: !s.str("errorMessage").is_empty(),
                icon: (!s.str("iconName").is_empty()).then(|| s.token("iconPosition")),
                disabled,
                readonly: s.bool("readonly"),
            };
            input = input.classes(&control.classes());
        }
        input
            .attr_if(!name.is_empty(), "name", name)
            .attr_if(!s.str("id").is_empty(), "id", s.str("id"))
            .attr_if(!s.str("placeholder").is_empty(), "placeholder", s.str("placeholder"))
            .attr_if(
                validated,
                "data-action-change",
                ActionCall::new("updateValue").arg(name).to_string(),
            )
            .attr_if(
                validated,
                "data-action-debounce",
                self.base.ctx.config().input_debounce_ms.to_string(),
            )
            .flag_if(disabled, "disabled")
            .flag_if(s.bool("required") && !disabled && !hidden, "required")
            .flag_if(s.bool("readonly"), "readonly")
    }

    fn icon(&self) -> Option<Element> {
        let s = &self.base.state;
        let name = s.str("iconName");
        if name.is_empty() {
            return None;
        }
        let size: Size = s.token("size");
        let position: IconPosition = s.token("iconPosition");
        let class = format!(
            "absolute top-1/2 transform -translate-y-1/2 {} text-slate-400",
            common::icon_offset(position, size)
        );
        Some(Icon::inline(
            &self.base.ctx,
            name,
            Default::default(),
            common::icon_size(size),
            &class,
        ))
    }
}

impl Component for Input {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        if s.token::<InputType>("type") == InputType::Hidden {
            return self.input_element();
        }
        let icon = self.icon();
        let required = s.bool("required") && !s.bool("disabled");
        Element::new("div")
            .class("ui-input space-y-1")
            .class(if s.bool("block") { "w-full" } else { "max-w-sm min-w-[200px]" })
            .child_opt(common::field_label(s.str("label"), s.str("id"), required))
            .child(
                Element::new("div")
                    .class_if(icon.is_some(), "relative")
                    .child(self.input_element())
                    .child_opt(icon),
            )
            .child_opt(common::help_text(s.str("helpText")))
            .child_opt(common::error_message(s.str("errorMessage")))
    }

    fn dispatch(&mut self, action: &str, args: &[ActionArg]) -> Result<()> {
        match action {
            "updateValue" => {
                let field = text_arg(action, args, 0)?;
                let value = text_arg(action, args, 1)?;
                self.update_value(&field, &value)
            }
            "clearError" => self.clear_error(),
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
