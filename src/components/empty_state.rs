//! Placeholder shown when a list or view has nothing to display.

use std::any::Any;

use tracing::{trace, warn};

use super::button::Button;
use super::icon::{Icon, IconSize};
use crate::action::{ActionArg, ActionCall};
use crate::component::{Base, Component};
use crate::error::Result;
use crate::event::EmptyStateAction;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props, StateValue};
use crate::style::{compose, token_enum, ClassList, Color, Size};

token_enum! {
    pub enum EmptyStateVariant {
        Default => "default",
        Card => "card",
    }
    default Default
}

/// Which call-to-action button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSlot {
    Primary,
    Secondary,
}

impl ActionSlot {
    fn field(self) -> &'static str {
        match self {
            ActionSlot::Primary => "primaryAction",
            ActionSlot::Secondary => "secondaryAction",
        }
    }

    fn kind(self) -> &'static str {
        match self {
            ActionSlot::Primary => "primary",
            ActionSlot::Secondary => "secondary",
        }
    }

    fn handler(self) -> &'static str {
        match self {
            ActionSlot::Primary => "primaryActionClicked",
            ActionSlot::Secondary => "secondaryActionClicked",
        }
    }
}

pub struct EmptyState {
    base: Base,
}

impl EmptyState {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "empty-state", id);
        let title = base.trans("empty_state.no_items");
        let description = base.trans("empty_state.description");
        let s = &mut base.state;
        s.declare("title", Field::new(title))?;
        s.declare("description", Field::new(description))?;
        s.declare("iconName", Field::new(""))?;
        s.declare("showBorder", Field::new(false))?;
        s.declare("primaryAction", Field::new(StateValue::Map(Default::default())))?;
        s.declare("secondaryAction", Field::new(StateValue::Map(Default::default())))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("color", Field::token(Color::Slate))?;
        s.declare("variant", Field::token(EmptyStateVariant::Default))?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    /// Emit `empty-state-action` when the slot carries an `action` key.
    pub fn action_clicked(&mut self, slot: ActionSlot) {
        let action = self
            .base
            .state
            .get(slot.field())
            .and_then(|entry| entry.get_text("action"));
        match action {
            Some(action) => self.base.emit(EmptyStateAction {
                action,
                kind: slot.kind().to_owned(),
            }),
            None => trace!(id = %self.base.id, slot = slot.kind(), "no action configured"),
        }
    }

    fn size(&self) -> Size {
        self.base.state.token("size")
    }

    fn container_classes(&self) -> ClassList {
        let s = &self.base.state;
        ClassList::new()
            .with("text-center")
            .with(match self.size() {
                Size::Small => "py-8 px-6",
                Size::Large => "py-20 px-8",
                Size::Normal => "py-12 px-6",
            })
            .with(match s.token::<EmptyStateVariant>("variant") {
                EmptyStateVariant::Card => "bg-white rounded-lg",
                EmptyStateVariant::Default => "bg-gray-50 rounded-lg",
            })
            .with_if(s.bool("showBorder"), "border-2 border-dashed border-gray-300")
    }

    fn icon(&self) -> Option<Element> {
        let s = &self.base.state;
        let name = s.str("iconName");
        if name.is_empty() {
            return None;
        }
        let color: Color = s.token("color");
        let (container, glyph) = match self.size() {
            Size::Small => ("w-12 h-12", "w-6 h-6"),
            Size::Large => ("w-20 h-20", "w-10 h-10"),
            Size::Normal => ("w-16 h-16", "w-8 h-8"),
        };
        Some(
            Element::new("div")
                .class("mx-auto rounded-full flex items-center justify-center")
                .class(container)
                .class(&compose::empty_state_icon_background(color))
                .child(Icon::inline(
                    &self.base.ctx,
                    name,
                    Default::default(),
                    IconSize::Auto,
                    &format!("{glyph} {}", compose::empty_state_icon_color(color)),
                )),
        )
    }

    fn button(&self, slot: ActionSlot) -> Option<Element> {
        let entry = self.base.state.get(slot.field()).filter(|entry| !entry.is_empty())?;
        let (color, variant) = match slot {
            ActionSlot::Primary => (self.base.state.str("color"), "solid"),
            ActionSlot::Secondary => ("slate", "filled"),
        };
        let props = Props::new()
            .set("type", "button")
            .set("color", color)
            .set("variant", variant)
            .set("label", entry.get_text("label").unwrap_or_default())
            .set("size", "normal");
        let id = format!("{}-{}", self.base.id, slot.kind());
        match Button::new(&self.base.ctx, &id, props) {
            Ok(button) => Some(
                button
                    .template()
                    .attr("data-action-click", ActionCall::new(slot.handler()).to_string()),
            ),
            Err(error) => {
                warn!(id = %self.base.id, %error, "skipping action button");
                None
            }
        }
    }

    fn actions(&self) -> Option<Element> {
        let primary = self.button(ActionSlot::Primary);
        let has_primary = primary.is_some();
        let secondary = self
            .button(ActionSlot::Secondary)
            .map(|button| button.class_if(has_primary, "ml-3"));
        if primary.is_none() && secondary.is_none() {
            return None;
        }
        Some(
            Element::new("div")
                .class("mt-6 flex justify-center items-center gap-1")
                .child_opt(primary)
                .child_opt(secondary),
        )
    }
}

impl Component for EmptyState {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let title_size = match self.size() {
            Size::Small => "text-lg",
            Size::Large => "text-2xl",
            Size::Normal => "text-xl",
        };
        let margin = if s.str("iconName").is_empty() { "mt-0" } else { "mt-4" };
        let description_size = if self.size() == Size::Small { "text-xs" } else { "text-sm" };
        Element::new("div").class("ui-empty-state").child(
            Element::new("div")
                .classes(&self.container_classes())
                .child_opt(self.icon())
                .child(
                    Element::new("h3")
                        .class(margin)
                        .class("font-semibold text-gray-900")
                        .class(title_size)
                        .text(s.str("title")),
                )
                .child(
                    Element::new("p")
                        .class("mt-1 text-gray-500 max-w-md mx-auto")
                        .class(description_size)
                        .text(s.str("description")),
                )
                .child_opt(self.actions()),
        )
    }

    fn dispatch(&mut self, action: &str, _args: &[ActionArg]) -> Result<()> {
        match action {
            "primaryActionClicked" => self.action_clicked(ActionSlot::Primary),
            "secondaryActionClicked" => self.action_clicked(ActionSlot::Secondary),
            other => return Err(self.base.unknown_action(other)),
        }
        Ok(())
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
    use pretty_assertions::assert_eq;

    fn empty(props: Props) -> EmptyState {
        EmptyState::new(&testing::context().unwrap(), "e1", props).unwrap()
    }

    #[test]
    fn translated_defaults() {
        assert_snapshot!(
            empty(Props::new()).render(),
            @r#"<div class="ui-empty-state"><div class="text-center py-12 px-6 bg-gray-50 rounded-lg"><h3 class="mt-0 font-semibold text-gray-900 text-xl">No items found</h3><p class="mt-1 text-gray-500 max-w-md mx-auto text-sm">There are currently no items to display.</p></div></div>"#
        );
    }

    #[test]
    fn french_defaults() {
        let ctx = testing::context_for_locale("fr").unwrap();
        let html = EmptyState::new(&ctx, "e", Props::new()).unwrap().render();
        assert!(!html.contains("No items found"));
    }

    #[test]
    fn buttons_carry_click_actions() {
        let props = Props::new()
            .set("color", "blue")
            .set("primaryAction", [("label", "Create"), ("action", "create")])
            .set("secondaryAction", [("label", "Import")]);
        let html = empty(props).render();
        assert!(html.contains("data-action-click=\"primaryActionClicked()\""));
        assert!(html.contains("data-action-click=\"secondaryActionClicked()\""));
        assert!(html.contains("bg-blue-600"));
        assert!(html.contains(" ml-3"));
    }

    #[test]
    fn clicks_emit_only_when_action_is_set() {
        let props = Props::new()
            .set("primaryAction", [("label", "Create"), ("action", "create")])
            .set("secondaryAction", [("label", "Import")]);
        let mut e = empty(props);
        e.perform("primaryActionClicked()").unwrap();
        e.perform("secondaryActionClicked()").unwrap();
        let events = e.take_events();
        assert_eq!(events.len(), 1);
        let event = events[0].downcast_ref::<EmptyStateAction>().unwrap();
        assert_eq!(event.action, "create");
        assert_eq!(event.kind, "primary");
    }

    #[test]
    fn small_icon_sizes() {
        let html = empty(Props::new().set("iconName", "inbox").set("size", "small").set("color", "red")).render();
        assert!(html.contains("mx-auto rounded-full flex items-center justify-center w-12 h-12 bg-red-100"));
        assert!(html.contains("w-6 h-6 text-red-600"));
        assert!(html.contains("<h3 class=\"mt-4 font-semibold text-gray-900 text-lg\">"));
    }
}
