//! Icon: an SVG looked up through the context's icon resolver.

use std::any::Any;

use crate::action::ActionArg;
use crate::component::{Base, Component};
use crate::error::Result;
use crate::icons::{kebab_case, IconVariant};
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props};
use crate::style::token_enum;

token_enum! {
    /// Icon size. `auto` follows the variant's pixel grid.
    pub enum IconSize {
        Auto => "auto",
        Four => "4",
        Five => "5",
        Six => "6",
    }
    default Auto
}

const MISSING_ICON_PATH: &str =
    "M9.75 9.75l4.5 4.5m0-4.5l-4.5 4.5M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

pub struct Icon {
    base: Base,
}

impl Icon {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "icon", id);
        base.state.declare("name", Field::new(""))?;
        base.state.declare("iconClass", Field::new(""))?;
        base.state.declare("variant", Field::token(IconVariant::Outline))?;
        base.state.declare("size", Field::token(IconSize::Auto))?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    /// Render an icon without constructing a component. Used by components
    /// that embed icons.
    pub fn inline(
        ctx: &UiContext,
        name: &str,
        variant: IconVariant,
        size: IconSize,
        class: &str,
    ) -> Element {
        let size_class = match size {
            IconSize::Auto => match variant {
                IconVariant::Micro => "size-4".to_owned(),
                IconVariant::Mini => "size-5".to_owned(),
                _ => "size-6".to_owned(),
            },
            other => format!("size-{other}"),
        };
        let classes = if class.is_empty() {
            size_class
        } else {
            format!("{size_class} {class}")
        };

        let svg = (!name.is_empty())
            .then(|| ctx.icon(&kebab_case(name), variant))
            .flatten();
        match svg {
            Some(svg) => Element::fragment().raw(add_svg_classes(&svg, &classes)),
            None => missing_icon(&classes),
        }
    }
}

fn missing_icon(classes: &str) -> Element {
    Element::new("svg")
        .class(classes)
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke-width", "1.5")
        .attr("stroke", "currentColor")
        .child(
            Element::new("path")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("d", MISSING_ICON_PATH),
        )
}

/// Append classes to the root `<svg>` tag, creating the attribute if needed.
fn add_svg_classes(svg: &str, classes: &str) -> String {
    let Some(start) = svg.find("<svg") else {
        return svg.to_owned();
    };
    let Some(end) = svg[start..].find('>').map(|e| start + e) else {
        return svg.to_owned();
    };
    let end = if svg[..end].ends_with('/') { end - 1 } else { end };
    if let Some(pos) = svg[start..end].find("class=\"") {
        let value_start = start + pos + "class=\"".len();
        if let Some(close) = svg[value_start..end].find('"') {
            let at = value_start + close;
            return format!("{} {}{}", &svg[..at], classes, &svg[at..]);
        }
    }
    format!("{} class=\"{}\"{}", &svg[..end], classes, &svg[end..])
}

impl Component for Icon {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        Self::inline(
            &self.base.ctx,
            s.str("name"),
            s.token::<IconVariant>("variant"),
            s.token::<IconSize>("size"),
            s.str("iconClass"),
        )
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
    use crate::icons::IconSet;
    use crate::provider::UiProvider;
    use crate::testing;

    fn ctx_with_icons() -> UiContext {
        let icons = IconSet::new()
            .with_icon("arrow-right", IconVariant::Outline, "<svg viewBox=\"0 0 24 24\"><path d=\"M1\"/></svg>")
            .with_icon("check", IconVariant::Mini, "<svg class=\"base\" viewBox=\"0 0 20 20\"></svg>");
        UiProvider::new()
            .with_icons(icons)
            .with_builtin_services()
            .unwrap()
            .boot()
            .unwrap()
    }

    #[test]
    fn resolves_kebab_cased_name_and_adds_classes() {
        let ctx = ctx_with_icons();
        let icon = Icon::new(&ctx, "i", Props::new().set("name", "arrowRight").set("iconClass", "text-red-500")).unwrap();
        assert_eq!(
            icon.render(),
            "<svg viewBox=\"0 0 24 24\" class=\"size-6 text-red-500\"><path d=\"M1\"/></svg>"
        );
    }

    #[test]
    fn appends_to_existing_class_attribute() {
        let ctx = ctx_with_icons();
        let icon = Icon::new(&ctx, "i", Props::new().set("name", "check").set("variant", "mini")).unwrap();
        assert_eq!(icon.render(), "<svg class=\"base size-5\" viewBox=\"0 0 20 20\"></svg>");
    }

    #[test]
    fn missing_icon_renders_fallback() {
        let ctx = testing::context().unwrap();
        let icon = Icon::new(&ctx, "i", Props::new().set("name", "nope").set("size", "4")).unwrap();
        let html = icon.render();
        assert!(html.starts_with("<svg class=\"size-4\" fill=\"none\""));
        assert!(html.contains(MISSING_ICON_PATH));
    }

    #[test]
    fn auto_size_follows_variant() {
        let ctx = testing::context().unwrap();
        let micro = Icon::inline(&ctx, "", IconVariant::Micro, IconSize::Auto, "");
        assert_eq!(micro.class_list().to_string(), "size-4");
    }

    #[test]
    fn rejects_unknown_size() {
        let ctx = testing::context().unwrap();
        assert!(Icon::new(&ctx, "i", Props::new().set("size", "7")).is_err());
    }

    #[test]
    fn self_closing_svg() {
        assert_eq!(add_svg_classes("<svg/>", "a"), "<svg class=\"a\"/>");
    }
}
