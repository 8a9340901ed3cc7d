//! Alert banner.

use std::any::Any;

use super::icon::{Icon, IconSize};
use crate::action::{ActionArg, ActionCall};
use crate::component::{Base, Component};
use crate::error::Result;
use crate::event::AlertDismissed;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props};
use crate::style::{compose, AlertVariant, Color};

const CLOSE_PATH: &str = "M5.47 5.47a.75.75 0 0 1 1.06 0L12 10.94l5.47-5.47a.75.75 0 1 1 1.06 1.06L13.06 12l5.47 5.47a.75.75 0 1 1-1.06 1.06L12 13.06l-5.47 5.47a.75.75 0 0 1-1.06-1.06L10.94 12 5.47 6.53a.75.75 0 0 1 0-1.06Z";

/// A titled message with an optional icon and close control.
///
/// `dismissible` alerts call `dismiss()` on the server, which emits
/// `alert-dismissed`. `withClose` alone hides the alert client-side.
pub struct Alert {
    base: Base,
}

impl Alert {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "alert", id);
        let s = &mut base.state;
        s.declare("title", Field::new(""))?;
        s.declare("description", Field::new(""))?;
        s.declare("withIcon", Field::new(true))?;
        s.declare("withClose", Field::new(false))?;
        s.declare("iconName", Field::new(""))?;
        s.declare("dismissible", Field::new(false))?;
        s.declare("color", Field::token(Color::Blue))?;
        s.declare("variant", Field::token(AlertVariant::Filled))?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    pub fn dismiss(&mut self) {
        let event = AlertDismissed {
            title: self.base.state.str("title").to_owned(),
            color: self.base.state.str("color").to_owned(),
        };
        self.base.emit(event);
    }

    fn icon(&self) -> Option<Element> {
        let s = &self.base.state;
        if !s.bool("withIcon") || s.str("iconName").is_empty() {
            return None;
        }
        let fill = compose::alert_icon(s.token("color"), s.token("variant"));
        Some(Icon::inline(
            &self.base.ctx,
            s.str("iconName"),
            Default::default(),
            IconSize::Six,
            &format!("mr-1 {fill}"),
        ))
    }

    fn close_button(&self) -> Option<Element> {
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
                    .class("size-5")
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

impl Component for Alert {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let description = s.str("description");
        let weight = if description.is_empty() { "font-medium" } else { "font-bold" };
        Element::new("div")
            .class("ui-alert w-full rounded-md py-4 px-6")
            .class(&compose::alert(s.token("color"), s.token("variant")))
            .id(self.base.id.as_str())
            .child(
                Element::new("div")
                    .class("flex items-center gap-2 relative")
                    .child_opt(self.icon())
                    .child(
                        Element::new("div")
                            .class("flex-1")
                            .child(Element::new("h3").class("text-sm").class(weight).text(s.str("title")))
                            .child_opt((!description.is_empty()).then(|| {
                                Element::new("p").class("text-sm font-normal").text(description)
                            })),
                    )
                    .child_opt(self.close_button()),
            )
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

    fn alert(props: Props) -> Alert {
        Alert::new(&testing::context().unwrap(), "a1", props).unwrap()
    }

    #[test]
    fn title_only() {
        assert_snapshot!(
            alert(Props::new().set("title", "Heads up")).render(),
            @r#"<div class="ui-alert w-full rounded-md py-4 px-6 bg-blue-50 text-blue-700 border border-blue-200" id="a1"><div class="flex items-center gap-2 relative"><div class="flex-1"><h3 class="text-sm font-medium">Heads up</h3></div></div></div>"#
        );
    }

    #[test]
    fn solid_with_icon_and_description() {
        let html = alert(
            Props::new()
                .set("title", "Saved")
                .set("description", "All good")
                .set("variant", "solid")
                .set("color", "green")
                .set("iconName", "check"),
        )
        .render();
        assert!(html.contains("bg-green-500 text-white"));
        assert!(html.contains("<svg class=\"size-6 mr-1 fill-white\""));
        assert!(html.contains("<h3 class=\"text-sm font-bold\">Saved</h3><p class=\"text-sm font-normal\">All good</p>"));
    }

    #[test]
    fn dismiss_emits_event() {
        let mut a = alert(Props::new().set("title", "Oops").set("color", "red").set("dismissible", true));
        assert!(a.render().contains("data-action-click=\"dismiss()\""));
        a.perform("dismiss()").unwrap();
        let events = a.take_events();
        assert_eq!(events[0].name(), "alert-dismissed");
        assert_eq!(events[0].event.payload(), serde_json::json!({"title": "Oops", "color": "red"}));
    }

    #[test]
    fn with_close_hides_client_side() {
        let html = alert(Props::new().set("withClose", true)).render();
        assert!(html.contains("data-toggle-class=\"hidden\" data-target=\"#a1\""));
    }

    #[test]
    fn icon_can_be_suppressed() {
        let html = alert(Props::new().set("iconName", "bell").set("withIcon", false)).render();
        assert!(!html.contains("<svg"));
    }
}
