//! Button.

use std::any::Any;

use super::icon::{Icon, IconSize};
use crate::action::ActionArg;
use crate::component::{Base, Component};
use crate::error::Result;
use crate::icons::IconVariant;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props};
use crate::style::{
    compose, token_enum, ButtonVariant, ClassList, Color, Control, ControlState, IconPosition,
    Size,
};

token_enum! {
    pub enum ButtonType {
        Button => "button",
        Submit => "submit",
    }
    default Button
}

/// A button with an optional leading or trailing icon.
pub struct Button {
    base: Base,
}

impl Button {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "button", id);
        let label = base.trans("button.label");
        let s = &mut base.state;
        s.declare("label", Field::new(label))?;
        s.declare("block", Field::new(false))?;
        s.declare("disabled", Field::new(false))?;
        s.declare("iconName", Field::new(""))?;
        s.declare("type", Field::token(ButtonType::Button))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("variant", Field::token(ButtonVariant::Filled))?;
        s.declare("iconPosition", Field::token(IconPosition::Left))?;
        s.declare("iconSize", Field::token(Size::Normal))?;
        s.declare("iconVariant", Field::token(IconVariant::Outline))?;
        s.declare("color", Field::token(Color::Indigo))?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    fn classes(&self) -> ClassList {
        let s = &self.base.state;
        let disabled = s.bool("disabled");
        ClassList::new()
            .with("ui-button")
            .with("flex items-center justify-center gap-2 py-2 transition-all duration-350 rounded-md font-medium focus:outline-none focus:ring-2 focus:ring-offset-2")
            .with(&compose::button(s.token("color"), s.token("variant")))
            .with(compose::size(s.token("size"), Control::Button))
            .with_if(s.bool("block"), "w-full")
            .with_if(disabled, compose::state(ControlState::Disabled))
            .with_if(!disabled, "cursor-pointer")
    }

    fn icon(&self) -> Option<Element> {
        let s = &self.base.state;
        let name = s.str("iconName");
        if name.is_empty() {
            return None;
        }
        let size = match s.token::<Size>("iconSize") {
            Size::Small => IconSize::Four,
            Size::Large => IconSize::Six,
            Size::Normal => IconSize::Five,
        };
        Some(Icon::inline(
            &self.base.ctx,
            name,
            s.token("iconVariant"),
            size,
            "",
        ))
    }
}

impl Component for Button {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let icon = self.icon();
        let (leading, trailing) = match s.token::<IconPosition>("iconPosition") {
            IconPosition::Right => (None, icon),
            IconPosition::Left => (icon, None),
        };
        Element::new("button")
            .attr("type", s.str("type"))
            .classes(&self.classes())
            .flag_if(s.bool("disabled"), "disabled")
            .child_opt(leading)
            .text(s.str("label"))
            .child_opt(trailing)
    }

    fn dispatch(&mut self, action: &str, _args: &[ActionArg]) -> Result<()> {
        Err(self.base.unknown_action(action))
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
    use crate::error::UiError;
    use crate::testing;
    use insta::assert_snapshot;

    fn button(props: Props) -> Button {
        Button::new(&testing::context().unwrap(), "b", props).unwrap()
    }

    #[test]
    fn default_button() {
        assert_snapshot!(
            button(Props::new()).render(),
            @r#"<button class="ui-button flex items-center justify-center gap-2 py-2 transition-all duration-350 rounded-md font-medium focus:outline-none focus:ring-2 focus:ring-offset-2 bg-indigo-50 text-indigo-600 hover:bg-indigo-100 border border-transparent text-sm px-4 cursor-pointer" type="button">Button</button>"#
        );
    }

    #[test]
    fn disabled_block_submit() {
        let html = button(
            Props::new()
                .set("type", "submit")
                .set("disabled", true)
                .set("block", true)
                .set("label", "Save"),
        )
        .render();
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains(" w-full "));
        assert!(html.contains("opacity-50 cursor-not-allowed bg-slate-50"));
        assert!(!html.contains("cursor-pointer"));
        assert!(html.ends_with(" disabled>Save</button>"));
    }

    #[test]
    fn trailing_icon() {
        let b = button(
            Props::new()
                .set("iconName", "arrowRight")
                .set("iconPosition", "right")
                .set("iconSize", "large"),
        );
        let html = b.render();
        let label = html.find(">Button").unwrap();
        let icon = html.find("<svg class=\"size-6\"").unwrap();
        assert!(label < icon);
    }

    #[test]
    fn label_is_translated() {
        let ctx = testing::context_for_locale("fr").unwrap();
        let b = Button::new(&ctx, "b", Props::new()).unwrap();
        assert_eq!(b.state().str("label"), "Bouton");
    }

    #[test]
    fn invalid_variant_is_a_configuration_error() {
        let err = Button::new(&testing::context().unwrap(), "b", Props::new().set("variant", "neon"))
            .err()
            .unwrap();
        assert!(matches!(err, UiError::Configuration { field, .. } if field == "variant"));
    }
}
