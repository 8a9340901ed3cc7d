//! Toast notification.
//!
//! A toast starts hidden and renders nothing until [`Toast::show`]. While
//! visible with `autoHide`, a countdown driver (see [`crate::timer`]) feeds
//! [`Toast::update_timer`]; reaching zero hides it.

use std::any::Any;

use tracing::{debug, trace};

use super::icon::{Icon, IconSize};
use crate::action::{ActionArg, ActionCall};
use crate::component::{optional_text_arg, Base, Component};
use crate::error::{Result, UiError};
use crate::event::{ToastAction, ToastHidden, ToastShown};
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props};
use crate::style::{compose, token_enum, Color, Token};

const DISMISS_PATH: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";

token_enum! {
    pub enum ToastPosition {
        TopRight => "top-right",
        TopLeft => "top-left",
        TopCenter => "top-center",
        BottomRight => "bottom-right",
        BottomLeft => "bottom-left",
        BottomCenter => "bottom-center",
        Center => "center",
    }
    default TopRight
}

pub struct Toast {
    base: Base,
}

impl Toast {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "toast", id);
        let duration = i64::try_from(ctx.config().toast_duration_ms).unwrap_or(i64::MAX);
        let s = &mut base.state;
        s.declare("title", Field::new(""))?;
        s.declare("message", Field::new(""))?;
        s.declare("duration", Field::new(duration))?;
        s.declare("dismissible", Field::new(true))?;
        s.declare("visible", Field::new(false))?;
        s.declare("autoHide", Field::new(true))?;
        s.declare("actionText", Field::new(""))?;
        s.declare("actionUrl", Field::new(""))?;
        s.declare("iconName", Field::new(""))?;
        s.declare("showIcon", Field::new(true))?;
        s.declare("showProgress", Field::new(true))?;
        s.declare("remainingTime", Field::new(0))?;
        s.declare("color", Field::token(Color::Blue))?;
        s.declare("position", Field::token(ToastPosition::TopRight))?;
        base.apply(&props)?;
        let duration = base.state.int("duration");
        base.state.set("remainingTime", duration)?;
        Ok(Self { base })
    }

    pub fn is_visible(&self) -> bool {
        self.base.state.bool("visible")
    }

    pub fn auto_hides(&self) -> bool {
        self.base.state.bool("autoHide")
    }

    pub fn duration(&self) -> i64 {
        self.base.state.int("duration")
    }

    pub fn remaining_time(&self) -> i64 {
        self.base.state.int("remainingTime")
    }

    /// Make the toast visible and restart its timer.
    ///
    /// Empty `message` / `title` keep the current text; a colour outside the
    /// palette keeps the current colour.
    pub fn show(&mut self, message: &str, title: &str, color: &str) -> Result<()> {
        if !message.is_empty() {
            self.base.state.set("message", message)?;
        }
        if !title.is_empty() {
            self.base.state.set("title", title)?;
        }
        match Color::parse(color) {
            Some(color) => self.base.state.set("color", color.as_str())?,
            None => trace!(id = %self.base.id, color, "ignoring unknown toast colour"),
        }
        let duration = self.duration();
        self.base.state.set("visible", true)?;
        self.base.state.set("remainingTime", duration)?;

        let s = &self.base.state;
        let event = ToastShown {
            color: s.str("color").to_owned(),
            message: s.str("message").to_owned(),
            title: s.str("title").to_owned(),
        };
        debug!(id = %self.base.id, "toast shown");
        self.base.emit(event);
        Ok(())
    }

    pub fn hide(&mut self) -> Result<()> {
        self.base.state.set("visible", false)?;
        let s = &self.base.state;
        let event = ToastHidden {
            color: s.str("color").to_owned(),
            message: s.str("message").to_owned(),
        };
        debug!(id = %self.base.id, "toast hidden");
        self.base.emit(event);
        Ok(())
    }

    /// Store the remaining time, clamped at zero. Hides a visible auto-hiding
    /// toast once it reaches zero.
    pub fn update_timer(&mut self, remaining: i64) -> Result<()> {
        let remaining = remaining.max(0);
        self.base.state.set("remainingTime", remaining)?;
        if remaining == 0 && self.auto_hides() && self.is_visible() {
            self.hide()?;
        }
        Ok(())
    }

    /// Emit `toast-action` when an action URL is set, then hide.
    pub fn perform_action(&mut self) -> Result<()> {
        let s = &self.base.state;
        let url = s.str("actionUrl");
        if !url.is_empty() {
            let event = ToastAction {
                url: url.to_owned(),
                text: s.str("actionText").to_owned(),
            };
            self.base.emit(event);
        }
        self.hide()
    }

    fn dom_id(&self) -> String {
        format!("toast-{}", self.base.id)
    }

    fn text_classes(&self) -> String {
        compose::toast_text(self.base.state.token("color"))
    }

    fn icon(&self) -> Option<Element> {
        let s = &self.base.state;
        if !s.bool("showIcon") {
            return None;
        }
        let color: Color = s.token("color");
        let name = match s.str("iconName") {
            "" => compose::toast_default_icon(color),
            name => name,
        };
        Some(Element::new("div").class("flex-shrink-0").child(Icon::inline(
            &self.base.ctx,
            name,
            Default::default(),
            IconSize::Five,
            &compose::toast_icon(color),
        )))
    }

    fn body(&self) -> Element {
        let s = &self.base.state;
        let text = self.text_classes();
        let (title, message, action) = (s.str("title"), s.str("message"), s.str("actionText"));
        Element::new("div")
            .class("ml-3 w-0 flex-1")
            .child_opt((!title.is_empty()).then(|| {
                Element::new("h4")
                    .class("text-sm font-semibold")
                    .class(&text)
                    .class("mb-1")
                    .text(title)
            }))
            .child_opt(
                (!message.is_empty()).then(|| Element::new("p").class("text-sm").class(&text).text(message)),
            )
            .child_opt((!action.is_empty()).then(|| {
                Element::new("div").class("mt-2").child(
                    Element::new("button")
                        .attr("type", "button")
                        .class("text-sm font-medium")
                        .class(&text)
                        .class("hover:underline focus:outline-none focus:underline")
                        .attr("data-action-click", ActionCall::new("performAction").to_string())
                        .text(action),
                )
            }))
    }

    fn dismiss_button(&self) -> Option<Element> {
        if !self.base.state.bool("dismissible") {
            return None;
        }
        Some(
            Element::new("div").class("ml-auto pl-3").child(
                Element::new("button")
                    .attr("type", "button")
                    .class("inline-flex")
                    .class(&self.text_classes())
                    .class("hover:opacity-75 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-white focus:ring-gray-500 rounded-md")
                    .attr("data-action-click", ActionCall::new("hide").to_string())
                    .child(Element::new("span").class("sr-only").text(self.base.trans("toast.dismiss")))
                    .child(
                        Element::new("svg")
                            .class("w-5 h-5")
                            .attr("fill", "currentColor")
                            .attr("viewBox", "0 0 20 20")
                            .child(
                                Element::new("path")
                                    .attr("fill-rule", "evenodd")
                                    .attr("d", DISMISS_PATH)
                                    .attr("clip-rule", "evenodd"),
                            ),
                    ),
            ),
        )
    }

    fn progress_bar(&self) -> Option<Element> {
        let duration = self.duration();
        if !self.base.state.bool("showProgress") || !self.auto_hides() || duration <= 0 {
            return None;
        }
        let percent = self.remaining_time() as f64 / duration as f64 * 100.0;
        Some(
            Element::new("div")
                .class("absolute bottom-0 left-0 right-0 h-1 bg-gray-200 rounded-b-lg overflow-hidden")
                .child(
                    Element::new("div")
                        .class("h-full")
                        .class(&compose::toast_progress(self.base.state.token("color")))
                        .class("transition-all duration-100 ease-linear")
                        .attr("style", format!("width: {percent}%"))
                        .flag("data-toast-progress"),
                ),
        )
    }
}

impl Component for Toast {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        if !self.is_visible() {
            return Element::fragment();
        }
        let s = &self.base.state;
        let color: Color = s.token("color");
        let position = match s.token::<ToastPosition>("position") {
            ToastPosition::TopLeft => "fixed top-4 left-4 z-50",
            ToastPosition::TopCenter => "fixed top-4 left-1/2 transform -translate-x-1/2 z-50",
            ToastPosition::BottomRight => "fixed bottom-4 right-4 z-50",
            ToastPosition::BottomLeft => "fixed bottom-4 left-4 z-50",
            ToastPosition::BottomCenter => "fixed bottom-4 left-1/2 transform -translate-x-1/2 z-50",
            ToastPosition::Center => {
                "fixed top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 z-50"
            }
            ToastPosition::TopRight => "fixed top-4 right-4 z-50",
        };
        let timed = self.auto_hides() && self.duration() > 0;
        let dom_id = self.dom_id();
        Element::new("div")
            .class("ui-toast")
            .class(position)
            .class("max-w-sm w-full")
            .class(&compose::toast_background(color))
            .class("border rounded-lg shadow-lg pointer-events-auto relative")
            .id(dom_id.as_str())
            .attr("data-toast-id", dom_id)
            .attr("data-toast-color", color.as_str())
            .attr("data-toast-position", s.str("position"))
            .attr_if(timed, "data-toast-timer", self.duration().to_string())
            .attr_if(timed, "data-toast-auto-hide", "true")
            .attr("data-toast-entering", "true")
            .attr("role", "alert")
            .attr("aria-live", "polite")
            .attr("aria-atomic", "true")
            .child(
                Element::new("div").class("p-4").child(
                    Element::new("div")
                        .class("flex items-start")
                        .child_opt(self.icon())
                        .child(self.body())
                        .child_opt(self.dismiss_button()),
                ),
            )
            .child_opt(self.progress_bar())
    }

    fn dispatch(&mut self, action: &str, args: &[ActionArg]) -> Result<()> {
        match action {
            "show" => {
                let color = match optional_text_arg(args, 2) {
                    color if color.is_empty() => "blue".to_owned(),
                    color => color,
                };
                self.show(&optional_text_arg(args, 0), &optional_text_arg(args, 1), &color)
            }
            "hide" => self.hide(),
            "updateTimer" => {
                let remaining = args.first().and_then(ActionArg::as_int).ok_or_else(|| {
                    UiError::InvalidArguments {
                        action: action.to_owned(),
                        message: "expected the remaining time in milliseconds".to_owned(),
                    }
                })?;
                self.update_timer(remaining)
            }
            "performAction" => self.perform_action(),
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
    use pretty_assertions::assert_eq;

    fn toast(props: Props) -> Toast {
        Toast::new(&testing::context().unwrap(), "n1", props).unwrap()
    }

    #[test]
    fn hidden_toast_renders_nothing() {
        let t = toast(Props::new().set("message", "Hi"));
        assert_eq!(t.render(), "");
        assert_eq!(t.remaining_time(), 5000);
    }

    #[test]
    fn show_emits_and_renders() {
        let mut t = toast(Props::new());
        t.show("Saved", "Done", "green").unwrap();
        assert!(t.is_visible());
        let events = t.take_events();
        assert_eq!(
            events[0].event.payload(),
            serde_json::json!({"color": "green", "message": "Saved", "title": "Done"})
        );

        let html = t.render();
        assert!(html.starts_with("<div class=\"ui-toast fixed top-4 right-4 z-50 max-w-sm w-full bg-green-50 border-green-200 border rounded-lg shadow-lg pointer-events-auto relative\" id=\"toast-n1\" data-toast-id=\"toast-n1\" data-toast-color=\"green\" data-toast-position=\"top-right\" data-toast-timer=\"5000\" data-toast-auto-hide=\"true\" data-toast-entering=\"true\" role=\"alert\""));
        assert!(html.contains("<h4 class=\"text-sm font-semibold text-green-800 mb-1\">Done</h4>"));
        assert!(html.contains("<span class=\"sr-only\">Dismiss</span>"));
        assert!(html.contains("style=\"width: 100%\" data-toast-progress"));
        assert!(html.contains("size-5 text-green-600"));
    }

    #[test]
    fn unknown_colour_is_ignored() {
        let mut t = toast(Props::new().set("color", "red"));
        t.show("x", "", "plaid").unwrap();
        assert_eq!(t.state().str("color"), "red");
    }

    #[test]
    fn timer_clamps_and_hides() {
        let mut t = toast(Props::new().set("duration", 1000));
        t.show("Saved", "", "green").unwrap();
        t.take_events();
        t.update_timer(500).unwrap();
        assert!(t.render().contains("width: 50%"));
        t.perform("updateTimer(-20)").unwrap();
        assert_eq!(t.remaining_time(), 0);
        assert!(!t.is_visible());
        let events = t.take_events();
        assert_eq!(events.len(), 1);
        assert!(events[0].downcast_ref::<ToastHidden>().is_some());
    }

    #[test]
    fn timer_without_auto_hide_stays() {
        let mut t = toast(Props::new().set("autoHide", false));
        t.show("Sticky", "", "blue").unwrap();
        t.update_timer(0).unwrap();
        assert!(t.is_visible());
        assert!(!t.render().contains("data-toast-progress"));
    }

    #[test]
    fn perform_action_emits_then_hides() {
        let mut t = toast(Props::new().set("actionText", "Undo").set("actionUrl", "/undo"));
        t.perform("show('Deleted')").unwrap();
        assert!(t.render().contains("data-action-click=\"performAction()\">Undo</button>"));
        t.take_events();
        t.perform("performAction()").unwrap();
        let names: Vec<_> = t.take_events().iter().map(|e| e.name().to_owned()).collect();
        assert_eq!(names, ["toast-action", "toast-hidden"]);
        assert!(!t.is_visible());
    }
}
