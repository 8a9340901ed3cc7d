//! Multi-line text input with an optional character counter.

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
    /// How the counter reads: `12/100 characters` or `88 characters remaining`.
    pub enum CountMode {
        Count => "count",
        Countdown => "countdown",
    }
    default Count
}

pub struct Textarea {
    base: Base,
}

impl Textarea {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "textarea", id);
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
        s.declare("rows", Field::new(4))?;
        s.declare("maxLength", Field::new(0))?;
        s.declare("color", Field::token(Color::Indigo))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("iconPosition", Field::token(IconPosition::Left))?;
        s.declare("countLength", Field::token(CountMode::Count))?;
        s.declare("rules", Field::new("").protected())?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    pub fn update_value(&mut self, field_name: &str, value: &str) -> Result<()> {
        self.base.state.set("value", value)?;
        self.base.state.set("name", field_name)?;
        if !self.base.state.str("rules").is_empty() {
            let s = &self.base.state;
            let field = common::first_non_empty(&[s.str("name"), s.str("label")], "field");
            let error = self
                .base
                .ctx
                .validate_current_field(field, s.str("value"), s.str("rules"))
                .unwrap_or_default();
            debug!(field, valid = error.is_empty(), "textarea validated");
            self.base.state.set("errorMessage", error)?;
        }
        let s = &self.base.state;
        let event = common::field_updated(
            common::first_non_empty(&[s.str("name"), s.str("id")], ""),
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

    fn max_length(&self) -> i64 {
        self.base.state.int("maxLength").max(0)
    }

    /// Characters left before the limit; negative once over it.
    pub fn remaining(&self) -> i64 {
        let length = self.base.state.str("value").chars().count() as i64;
        self.max_length() - length
    }

    fn counter_text(&self) -> String {
        let s = &self.base.state;
        let remaining = self.remaining();
        let ctx = &self.base.ctx;
        match s.token::<CountMode>("countLength") {
            CountMode::Countdown if remaining >= 0 => ctx.trans(
                "textarea.characters_countdown",
                &[("count", remaining.to_string().as_str())],
            ),
            CountMode::Countdown => ctx.trans(
                "textarea.characters_count",
                &[("count", remaining.unsigned_abs().to_string().as_str())],
            ),
            CountMode::Count => ctx.trans(
                "textarea.characters_default",
                &[
                    ("count", s.str("value").chars().count().to_string().as_str()),
                    ("maxLength", self.max_length().to_string().as_str()),
                ],
            ),
        }
    }

    fn counter(&self) -> Option<Element> {
        let s = &self.base.state;
        let max = self.max_length();
        if max == 0 || s.bool("disabled") || s.bool("readonly") {
            return None;
        }
        let remaining = self.remaining();
        let color = if remaining < 0 {
            "text-red-600"
        } else if (remaining as f64) < max as f64 * 0.1 {
            "text-yellow-600"
        } else {
            "text-slate-500"
        };
        Some(
            Element::new("p")
                .class("mt-1 text-xs")
                .class(color)
                .id(format!("counter-{}", self.base.id))
                .attr("aria-live", "polite")
                .flag_if(true, "data-character-display")
                .text(self.counter_text()),
        )
    }

    fn described_by(&self) -> String {
        let s = &self.base.state;
        let id = &self.base.id;
        let mut ids = Vec::new();
        if !s.str("errorMessage").is_empty() {
            ids.push(format!("error-{id}"));
        }
        if !s.str("helpText").is_empty() {
            ids.push(format!("help-{id}"));
        }
        if self.max_length() > 0 {
            ids.push(format!("counter-{id}"));
        }
        ids.join(" ")
    }

    fn textarea_element(&self) -> Element {
        let s = &self.base.state;
        let name = s.str("name");
        let disabled = s.bool("disabled");
        let max = self.max_length();
        let validated = !s.str("rules").is_empty();
        let control = TextControl {
            size: s.token("size"),
            color: s.token("color"),
            has_error: !s.str("errorMessage").is_empty(),
            icon: (!s.str("iconName").is_empty()).then(|| s.token("iconPosition")),
            disabled,
            readonly: s.bool("readonly"),
        };
        let counter_config = serde_json::json!({
            "maxLength": max,
            "mode": s.str("countLength"),
        });
        let described_by = self.described_by();

        Element::new("textarea")
            .attr("rows", s.int("rows").to_string())
            .classes(&control.classes())
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
            .flag_if(s.bool("required") && !disabled, "required")
            .flag_if(s.bool("readonly"), "readonly")
            .attr_if(max > 0, "data-character-counter", counter_config.to_string())
            .attr_if(!s.str("errorMessage").is_empty(), "aria-invalid", "true")
            .attr_if(!described_by.is_empty(), "aria-describedby", described_by)
            .text(s.str("value"))
    }

    fn icon(&self) -> Option<Element> {
        let s = &self.base.state;
        let name = s.str("iconName");
        if name.is_empty() {
            return None;
        }
        let size: Size = s.token("size");
        let class = format!(
            "absolute top-2.5 transform {} text-slate-400",
            common::icon_offset(s.token("iconPosition"), size)
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

impl Component for Textarea {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let id = &self.base.id;
        let icon = self.icon();
        let required = s.bool("required") && !s.bool("disabled");
        Element::new("div")
            .class("ui-textarea space-y-1")
            .class(if s.bool("block") { "w-full" } else { "max-w-sm min-w-[200px]" })
            .child_opt(common::field_label(s.str("label"), s.str("id"), required))
            .child(
                Element::new("div")
                    .class_if(icon.is_some(), "relative")
                    .child(self.textarea_element())
                    .child_opt(icon)
                    .child_opt(self.counter()),
            )
            .child_opt(common::help_text(s.str("helpText")).map(|p| p.id(format!("help-{id}"))))
            .child_opt(
                common::error_message(s.str("errorMessage")).map(|p| p.id(format!("error-{id}"))),
            )
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
