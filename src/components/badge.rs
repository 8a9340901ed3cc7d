//! Badge: a short coloured label with an optional dot and close control.

use std::any::Any;

use crate::action::{ActionArg, ActionCall};
use crate::component::{Base, Component};
use crate::error::Result;
use crate::event::BadgeRemoved;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props};
use crate::style::{compose, BadgeShape, BadgeVariant, ClassList, Color};

const CLOSE_PATH: &str = "M5.47 5.47a.75.75 0 0 1 1.06 0L12 10.94l5.47-5.47a.75.75 0 1 1 1.06 1.06L13.06 12l5.47 5.47a.75.75 0 1 1-1.06 1.06L12 13.06l-5.47 5.47a.75.75 0 0 1-1.06-1.06L10.94 12 5.47 6.53a.75.75 0 0 1 0-1.06Z";

pub struct Badge {
    base: Base,
}

impl Badge {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "badge", id);
        let s = &mut base.state;
        s.declare("label", Field::new(""))?;
        s.declare("dot", Field::new(false))?;
        s.declare("pulse", Field::new(false))?;
        s.declare("withClose", Field::new(false))?;
        s.declare("dismissible", Field::new(false))?;
        s.declare("color", Field::token(Color::Slate))?;
        s.declare("dotColor", Field::token(Color::Slate))?;
        s.declare("variant", Field::token(BadgeVariant::Filled))?;
        s.declare("shape", Field::token(BadgeShape::Rounded))?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    pub fn dismiss(&mut self) {
        let event = BadgeRemoved {
            label: self.base.state.str("label").to_owned(),
            color: self.base.state.str("color").to_owned(),
        };
        self.base.emit(event);
    }

    fn classes(&self) -> ClassList {
        let s = &self.base.state;
        let shape = match s.token::<BadgeShape>("shape") {
            BadgeShape::Pill => "rounded-full",
            BadgeShape::Square => "rounded-none",
            BadgeShape::Rounded => "rounded-md",
        };
        ClassList::new()
            .with("ui-badge inline-flex items-center gap-1.5 whitespace-nowrap text-xs py-1 px-2")
            .with(shape)
            .with(&compose::badge(s.token("color"), s.token("variant")))
    }

    fn dot(&self) -> Option<Element> {
        let s = &self.base.state;
        s.bool("dot").then(|| {
            Element::new("span")
                .class("rounded-full")
                .class(&compose::dot(s.token("dotColor")))
                .class_if(s.bool("pulse"), "animate-pulse")
                .class("h-2 w-2")
        })
    }

    fn remove_button(&self) -> Option<Element> {
        let s = &self.base.state;
        let dismissible = s.bool("dismissible");
        if !dismissible && !s.bool("withClose") {
            return None;
        }
        let button = Element::new("div")
            .class("cursor-pointer my-auto opacity-65 transition-opacity duration-300 hover:opacity-100");
        let button = if dismissible {
            button.attr("data-action-click", ActionCall::new("dismiss").to_string())
        } else {
            button
                .attr("data-toggle-class", "hidden")
                .attr("data-target", format!("#{}", self.base.id))
        };
        Some(
            button.child(
                Element::new("svg")
                    .class("h-4 w-4")
                    .attr("xmlns", "http://www.w3.org/2000/svg")
                    .attr("viewBox", "0 0 24 24")
                    .attr("fill", "currentColor")
                    .child(
                        Element::new("path")
                            .attr("fill-rule", "evenodd")
                            .attr("d", CLOSE_PATH)
                            .attr("clip-rule", "evenodd"),
                    ),
            ),
        )
    }
}

impl Component for Badge {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        Element::new("span")
            .classes(&self.classes())
            .id(self.base.id.as_str())
            .child_opt(self.dot())
            .child(Element::new("span").text(self.base.state.str("label")))
            .child_opt(self.remove_button())
    }

    fn dispatch(&mut self, action: &str, _args: &[ActionArg]) -> Result<()> {
        match action {
            "dismiss" => {
                self.dismiss();
                Ok(())
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use insta::assert_snapshot;

    fn badge(props: Props) -> Badge {
        Badge::new(&testing::context().unwrap(), "b1", props).unwrap()
    }

    #[test]
    fn default_badge() {
        assert_snapshot!(
            badge(Props::new().set("label", "New")).render(),
            @r#"<span class="ui-badge inline-flex items-center gap-1.5 whitespace-nowrap text-xs py-1 px-2 rounded-md bg-slate-100 text-slate-800 border-slate-200" id="b1"><span>New</span></span>"#
        );
    }

    #[test]
    fn pulsing_dot_uses_dot_color() {
        let html = badge(
            Props::new()
                .set("label", "Live")
                .set("dot", true)
                .set("pulse", true)
                .set("dotColor", "green")
                .set("shape", "pill"),
        )
        .render();
        assert!(html.contains("<span class=\"rounded-full bg-green-500 animate-pulse h-2 w-2\"></span>"));
        assert!(html.contains("rounded-full bg-slate-100"));
    }

    #[test]
    fn dismiss_emits_badge_removed() {
        let mut b = badge(Props::new().set("label", "rust").set("color", "orange").set("dismissible", true));
        assert!(b.render().contains("data-action-click=\"dismiss()\""));
        b.perform("dismiss()").unwrap();
        let events = b.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "badge-removed");
        assert_eq!(events[0].event.payload(), serde_json::json!({"label": "rust", "color": "orange"}));
    }

    #[test]
    fn with_close_targets_own_id() {
        let html = badge(Props::new().set("withClose", true).set("variant", "solid")).render();
        assert!(html.contains("data-target=\"#b1\""));
        assert!(html.contains("bg-slate-600 text-white border border-slate-600"));
    }

    #[test]
    fn rejects_unknown_shape() {
        let ctx = testing::context().unwrap();
        assert!(Badge::new(&ctx, "b", Props::new().set("shape", "hexagon")).is_err());
    }
}
