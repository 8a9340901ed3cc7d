//! On/off switch.

use std::any::Any;

use tracing::{debug, trace};

use crate::action::{ActionArg, ActionCall};
use crate::component::common;
use crate::component::{Base, Component};
use crate::error::Result;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props, StateValue};
use crate::style::{compose, ClassList, Color, LabelPosition, Size};

pub struct Toggle {
    base: Base,
}

impl Toggle {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "toggle", id);
        let s = &mut base.state;
        s.declare("label", Field::new(""))?;
        s.declare("value", Field::new(false))?;
        s.declare("name", Field::new(format!("toggle-{id}")))?;
        s.declare("id", Field::new(format!("toggle_id_{id}")))?;
        s.declare("disabled", Field::new(false))?;
        s.declare("required", Field::new(false))?;
        s.declare("helpText", Field::new(""))?;
        s.declare("errorMessage", Field::new(""))?;
        s.declare("onLabel", Field::new(""))?;
        s.declare("offLabel", Field::new(""))?;
        s.declare("showLabels", Field::new(false))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("color", Field::token(Color::Indigo))?;
        s.declare("labelPosition", Field::token(LabelPosition::Right))?;
        s.declare("rules", Field::new("").protected())?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    pub fn is_on(&self) -> bool {
        self.base.state.bool("value")
    }

    /// Flip the switch, validate `"1"`/`"0"` and emit `field-updated`.
    pub fn toggle(&mut self) -> Result<()> {
        if self.base.state.bool("disabled") {
            trace!(id = %self.base.id, "disabled, ignoring toggle");
            return Ok(());
        }
        self.base.state.set("value", !self.is_on())?;

        let s = &self.base.state;
        if !s.str("rules").is_empty() {
            let field = common::first_non_empty(&[s.str("name"), s.str("label")], "field");
            let value = if self.is_on() { "1" } else { "0" };
            let error = self
                .base
                .ctx
                .validate_current_field(field, value, s.str("rules"))
                .unwrap_or_default();
            debug!(field, valid = error.is_empty(), "toggle validated");
            self.base.state.set("errorMessage", error)?;
        }

        let s = &self.base.state;
        let event = common::field_updated(
            common::first_non_empty(&[s.str("name"), s.str("id")], ""),
            &StateValue::from(self.is_on()),
            s.str("errorMessage"),
            Some("toggle"),
        );
        self.base.emit(event);
        Ok(())
    }

    fn switch(&self) -> Element {
        let s = &self.base.state;
        let size: Size = s.token("size");
        let color: Color = s.token("color");
        let disabled = s.bool("disabled");
        let (track, knob, shift) = match size {
            Size::Small => ("w-9 h-5", "w-5 h-5", "peer-checked:translate-x-4"),
            Size::Large => ("w-14 h-7", "w-7 h-7", "peer-checked:translate-x-7"),
            Size::Normal => ("w-11 h-6", "w-6 h-6", "peer-checked:translate-x-6"),
        };
        let track_classes = ClassList::new()
            .with("peer appearance-none rounded-full cursor-pointer transition-colors duration-300")
            .with(track)
            .with("bg-slate-100")
            .with(&compose::toggle_active(color))
            .with_if(disabled, "opacity-50 cursor-not-allowed");
        let knob_classes = ClassList::new()
            .with("absolute top-0 left-0 bg-white rounded-full border shadow-sm transition-transform duration-300 cursor-pointer")
            .with(knob)
            .with(shift)
            .with("border-slate-300")
            .with(&compose::toggle_border(color))
            .with_if(disabled, "cursor-not-allowed");

        let switch = Element::new("div")
            .class("relative inline-block")
            .class(track)
            .child(
                Element::new("input")
                    .id(s.str("id"))
                    .attr("type", "checkbox")
                    .classes(&track_classes)
                    .flag_if(self.is_on(), "checked")
                    .flag_if(disabled, "disabled")
                    .attr("data-action-change", ActionCall::new("toggle").to_string()),
            )
            .child(Element::new("label").attr("for", s.str("id")).classes(&knob_classes));

        if !s.bool("showLabels") {
            return switch;
        }
        let text = if size == Size::Large { "text-sm" } else { "text-xs" };
        let (off_shade, on_shade) = if self.is_on() {
            ("text-slate-200", "text-slate-600")
        } else {
            ("text-slate-600", "text-slate-200")
        };
        Element::new("div")
            .class("inline-flex gap-2 items-center")
            .child(
                Element::new("span")
                    .class("font-medium text-slate-500")
                    .class(text)
                    .class(off_shade)
                    .text(s.str("offLabel")),
            )
            .child(switch)
            .child(
                Element::new("span")
                    .class("font-medium text-slate-500")
                    .class(text)
                    .class(on_shade)
                    .text(s.str("onLabel")),
            )
    }

    fn main_label(&self) -> Option<Element> {
        let s = &self.base.state;
        if s.str("label").is_empty() {
            return None;
        }
        let classes = ClassList::new()
            .with("text-slate-600 cursor-pointer")
            .with_if(s.bool("disabled"), "opacity-50 cursor-not-allowed")
            .with(match s.token::<Size>("size") {
                Size::Small => "text-xs",
                Size::Large => "text-base",
                Size::Normal => "text-sm",
            });
        let mark = (s.bool("required") && !s.bool("disabled"))
            .then(|| Element::new("span").class("text-red-500 ml-1").text("*"));
        let label = Element::new("label").attr("for", s.str("id")).classes(&classes);

        if s.str("helpText").is_empty() {
            return Some(label.class("font-medium").text(s.str("label")).child_opt(mark));
        }
        Some(
            label.child(
                Element::new("div")
                    .child(
                        Element::new("p")
                            .class("font-medium")
                            .text(s.str("label"))
                            .child_opt(mark),
                    )
                    .child(Element::new("p").class("text-slate-500").text(s.str("helpText"))),
            ),
        )
    }
}

impl Component for Toggle {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let layout = match s.token::<LabelPosition>("labelPosition") {
            LabelPosition::Left => "inline-flex gap-3 flex-row-reverse items-center",
            LabelPosition::Right => "inline-flex gap-3 items-center",
            LabelPosition::Top => "inline-flex flex-col gap-2 items-start",
            LabelPosition::Bottom => "inline-flex flex-col-reverse gap-2 items-start",
        };
        Element::new("div")
            .class("ui-toggle")
            .child(
                Element::new("input")
                    .attr("type", "hidden")
                    .attr("name", s.str("name"))
                    .attr("value", if self.is_on() { "1" } else { "0" }),
            )
            .child(
                Element::new("div")
                    .class(layout)
                    .child(self.switch())
                    .child_opt(self.main_label()),
            )
            .child_opt(common::error_message(s.str("errorMessage")))
    }

    fn dispatch(&mut self, action: &str, _args: &[ActionArg]) -> Result<()> {
        match action {
            "toggle" => self.toggle(),
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
