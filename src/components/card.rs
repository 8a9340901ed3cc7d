//! Content card: optional image, header with badges, body, and a footer of
//! icons, a user line and action buttons.
//!
//! Badges, the user avatar and action buttons are real nested components,
//! built from the list entries and rendered inline. An entry that fails to
//! build (say, an unknown colour) is skipped with a warning.

use std::any::Any;

use tracing::warn;

use super::avatar::Avatar;
use super::badge::Badge;
use super::button::Button;
use super::icon::{Icon, IconSize};
use crate::action::ActionArg;
use crate::component::{Base, Component};
use crate::error::Result;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props, StateValue};
use crate::style::{token_enum, ClassList, Size};

token_enum! {
    pub enum CardVariant {
        Filled => "filled",
        Outline => "outline",
        Shadow => "shadow",
        Flat => "flat",
    }
    default Shadow
}

token_enum! {
    pub enum ImagePosition {
        Top => "top",
        Left => "left",
        Right => "right",
    }
    default Top
}

token_enum! {
    /// Step scale for inner padding and vertical spacing.
    pub enum Spacing {
        None => "none",
        Small => "small",
        Normal => "normal",
        Large => "large",
    }
    default Normal
}

pub struct Card {
    base: Base,
}

impl Card {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "card", id);
        let s = &mut base.state;
        s.declare("title", Field::new(""))?;
        s.declare("subtitle", Field::new(""))?;
        s.declare("description", Field::new(""))?;
        s.declare("imageSrc", Field::new(""))?;
        s.declare("imageAlt", Field::new(""))?;
        s.declare("shadow", Field::new(false))?;
        s.declare("border", Field::new(false))?;
        s.declare("rounded", Field::new(true))?;
        s.declare("hoverable", Field::new(false))?;
        s.declare("clickable", Field::new(false))?;
        s.declare("href", Field::new(""))?;
        s.declare("withDivider", Field::new(false))?;
        s.declare("badges", Field::new(StateValue::empty_list()))?;
        s.declare("actions", Field::new(StateValue::empty_list()))?;
        s.declare("icons", Field::new(StateValue::empty_list()))?;
        s.declare("user", Field::new(StateValue::Map(Default::default())))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("variant", Field::token(CardVariant::Shadow))?;
        s.declare("imagePosition", Field::token(ImagePosition::Top))?;
        s.declare("padding", Field::token(Spacing::Normal))?;
        s.declare("spacing", Field::token(Spacing::Normal))?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    fn is_link(&self) -> bool {
        self.base.state.bool("clickable") && !self.base.state.str("href").is_empty()
    }

    fn card_classes(&self) -> ClassList {
        let s = &self.base.state;
        let variant = s.token::<CardVariant>("variant");
        ClassList::new()
            .with("ui-card relative overflow-hidden transition-all duration-200")
            .with(match s.token::<Size>("size") {
                Size::Small => "max-w-sm",
                Size::Large => "max-w-2xl",
                Size::Normal => "max-w-lg",
            })
            .with(match variant {
                CardVariant::Filled => "bg-white",
                CardVariant::Outline => "bg-white border border-gray-200",
                CardVariant::Shadow => "bg-white shadow-lg",
                CardVariant::Flat => "bg-gray-50",
            })
            .with_if(s.bool("rounded"), "rounded-lg")
            .with_if(s.bool("shadow") && variant != CardVariant::Shadow, "shadow-sm")
            .with_if(s.bool("border"), "border border-gray-200")
            .with_if(s.bool("hoverable"), "hover:shadow-md hover:-translate-y-0.5 cursor-pointer")
            .with_if(self.is_link(), "cursor-pointer hover:shadow-lg")
    }

    fn image(&self) -> Option<Element> {
        let s = &self.base.state;
        let src = s.str("imageSrc");
        if src.is_empty() {
            return None;
        }
        let rounded = !s.bool("shadow") && !s.bool("border") && s.bool("rounded");
        let container = match s.token::<ImagePosition>("imagePosition") {
            ImagePosition::Left | ImagePosition::Right => "flex-shrink-0 w-48",
            ImagePosition::Top => "w-full h-48 overflow-hidden",
        };
        let alt = match s.str("imageAlt") {
            "" => "Image de la carte",
            alt => alt,
        };
        Some(
            Element::new("div").class(container).child(
                Element::new("img")
                    .attr("src", src)
                    .attr("alt", alt)
                    .class_if(rounded, "rounded-lg")
                    .class("w-full h-full object-cover")
                    .attr("loading", "lazy"),
            ),
        )
    }

    fn badges(&self) -> Option<Element> {
        let badges: Vec<Element> = self
            .base
            .state
            .list("badges")
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let label = entry.get_text("label")?;
                let props = Props::new()
                    .set("label", label)
                    .set("color", entry.get_text("color").unwrap_or_else(|| "slate".to_owned()))
                    .set("variant", entry.get_text("variant").unwrap_or_else(|| "filled".to_owned()));
                self.nested(Badge::new(&self.base.ctx, &format!("{}-badge-{i}", self.base.id), props))
            })
            .collect();
        (!badges.is_empty()).then(|| Element::new("div").class("flex flex-wrap gap-2").children(badges))
    }

    fn header(&self) -> Option<Element> {
        let s = &self.base.state;
        let (title, subtitle) = (s.str("title"), s.str("subtitle"));
        if title.is_empty() && subtitle.is_empty() && s.list("badges").is_empty() {
            return None;
        }
        Some(
            Element::new("div").class("card-header").child(
                Element::new("div")
                    .class("flex items-start justify-between")
                    .child(
                        Element::new("div")
                            .class("flex-1")
                            .child_opt((!title.is_empty()).then(|| {
                                Element::new("h3")
                                    .class("text-base font-semibold text-gray-900 leading-tight")
                                    .text(title)
                            }))
                            .child_opt((!subtitle.is_empty()).then(|| {
                                Element::new("p").class("text-xs text-gray-600 mt-1").text(subtitle)
                            })),
                    )
                    .child_opt(
                        self.badges()
                            .map(|badges| Element::new("div").class("flex justify-end").child(badges)),
                    ),
            ),
        )
    }

    fn body(&self) -> Option<Element> {
        let description = self.base.state.str("description");
        (!description.is_empty()).then(|| {
            Element::new("div")
                .class("card-body")
                .child(Element::new("p").class("text-gray-700 leading-relaxed").text(description))
        })
    }

    fn icons(&self) -> Option<Element> {
        let icons: Vec<Element> = self
            .base
            .state
            .list("icons")
            .iter()
            .filter_map(|entry| {
                let name = entry.get_text("iconName")?;
                let color = entry.get_text("color").unwrap_or_else(|| "gray-500".to_owned());
                let content = Element::new("div")
                    .class("flex items-center gap-2")
                    .child(Icon::inline(
                        &self.base.ctx,
                        &name,
                        Default::default(),
                        IconSize::Five,
                        &format!("text-{color}"),
                    ))
                    .child_opt(
                        entry
                            .get_text("value")
                            .map(|value| Element::new("span").class("text-sm text-gray-600").text(value)),
                    );
                Some(match link_of(entry) {
                    Some(href) => Element::new("a")
                        .attr("href", href)
                        .class("hover:opacity-80 transition-opacity")
                        .child(content),
                    None => content,
                })
            })
            .collect();
        (!icons.is_empty()).then(|| Element::new("div").class("flex items-center gap-4").children(icons))
    }

    fn user(&self) -> Option<Element> {
        let user = self.base.state.get("user")?;
        let image = user.get_text("image");
        let text = user.get_text("text");
        if image.is_none() && text.is_none() {
            return None;
        }
        let props = Props::new().set("size", "small");
        let props = match (&image, &text) {
            (Some(image), _) => props.set("src", image),
            (None, Some(text)) => props.set("initials", text),
            (None, None) => props,
        };
        let avatar = self.nested(Avatar::new(&self.base.ctx, &format!("{}-user", self.base.id), props))?;
        Some(
            Element::new("div")
                .class("flex items-center gap-3 pt-4")
                .child(avatar)
                .child_opt(text.map(|text| Element::new("span").class("text-sm text-gray-600").text(text))),
        )
    }

    fn actions(&self) -> Option<Element> {
        let actions: Vec<Element> = self
            .base
            .state
            .list("actions")
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let label = entry.get_text("label")?;
                let text_or = |key: &str, default: &str| entry.get_text(key).unwrap_or_else(|| default.to_owned());
                let props = Props::new()
                    .set("label", label)
                    .set("color", text_or("color", "indigo"))
                    .set("variant", text_or("variant", "outline"))
                    .set("size", text_or("size", "normal"));
                let button = self.nested(Button::new(&self.base.ctx, &format!("{}-action-{i}", self.base.id), props))?;
                Some(match link_of(entry) {
                    Some(href) => Element::new("a").attr("href", href).child(button),
                    None => button,
                })
            })
            .collect();
        (!actions.is_empty())
            .then(|| Element::new("div").class("flex items-center justify-end gap-3").children(actions))
    }

    fn footer(&self) -> Option<Element> {
        let parts: Vec<Element> = [self.icons(), self.user(), self.actions()]
            .into_iter()
            .flatten()
            .collect();
        (!parts.is_empty()).then(|| Element::new("div").class("card-footer space-y-3").children(parts))
    }

    fn content(&self) -> Element {
        let s = &self.base.state;
        let padding = match s.token::<Spacing>("padding") {
            Spacing::None => "p-0",
            Spacing::Small => "p-4",
            Spacing::Large => "p-8",
            Spacing::Normal => "p-6",
        };
        let spacing = match s.token::<Spacing>("spacing") {
            Spacing::None => "space-y-0",
            Spacing::Small => "space-y-2",
            Spacing::Large => "space-y-6",
            Spacing::Normal => "space-y-4",
        };
        let header = self.header();
        let body = self.body();
        let footer = self.footer();
        let divider = (s.bool("withDivider") && header.is_some() && (body.is_some() || footer.is_some()))
            .then(|| Element::new("hr").class("border-gray-200"));
        Element::new("div")
            .class(padding)
            .class(spacing)
            .child_opt(header)
            .child_opt(divider)
            .child_opt(body)
            .child_opt(footer)
    }

    fn nested<C: Component>(&self, built: Result<C>) -> Option<Element> {
        match built {
            Ok(component) => Some(component.template()),
            Err(error) => {
                warn!(card = %self.base.id, %error, "skipping nested component");
                None
            }
        }
    }
}

/// `href`, else `#route`, for footer icons and actions.
fn link_of(entry: &StateValue) -> Option<String> {
    entry
        .get_text("href")
        .or_else(|| entry.get_text("route").map(|route| format!("#{route}")))
}

impl Component for Card {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let image = self.image();
        let content = self.content();
        let inner = match s.token::<ImagePosition>("imagePosition") {
            ImagePosition::Left => vec![Element::new("div")
                .class("flex")
                .child_opt(image)
                .child(Element::new("div").class("flex-1").child(content))],
            ImagePosition::Right => vec![Element::new("div")
                .class("flex")
                .child(Element::new("div").class("flex-1").child(content))
                .child_opt(image)],
            ImagePosition::Top => image.into_iter().chain([content]).collect(),
        };
        let wrapper = if self.is_link() {
            Element::new("a").attr("href", s.str("href"))
        } else {
            Element::new("div")
        };
        wrapper.classes(&self.card_classes()).children(inner)
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
    use crate::testing;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn card(props: Props) -> Card {
        Card::new(&testing::context().unwrap(), "c1", props).unwrap()
    }

    #[test]
    fn title_and_description() {
        assert_snapshot!(
            card(Props::new().set("title", "Rust").set("description", "Fast and safe")).render(),
            @r#"<div class="ui-card relative overflow-hidden transition-all duration-200 max-w-lg bg-white shadow-lg rounded-lg"><div class="p-6 space-y-4"><div class="card-header"><div class="flex items-start justify-between"><div class="flex-1"><h3 class="text-base font-semibold text-gray-900 leading-tight">Rust</h3></div></div></div><div class="card-body"><p class="text-gray-700 leading-relaxed">Fast and safe</p></div></div></div>"#
        );
    }

    #[test]
    fn clickable_card_is_a_link() {
        let html = card(Props::new().set("clickable", true).set("href", "/docs")).render();
        assert!(html.starts_with("<a class=\"ui-card"));
        assert!(html.contains("cursor-pointer hover:shadow-lg"));
        assert!(html.contains("href=\"/docs\""));

        let html = card(Props::new().set("clickable", true)).render();
        assert!(html.starts_with("<div"));
    }

    #[test]
    fn left_image_layout() {
        let html = card(Props::new().set("imageSrc", "/a.png").set("imagePosition", "left").set("variant", "flat")).render();
        assert!(html.contains("<div class=\"flex\"><div class=\"flex-shrink-0 w-48\"><img class=\"rounded-lg w-full h-full object-cover\" src=\"/a.png\" alt=\"Image de la carte\""));
        assert!(html.contains("bg-gray-50"));
    }

    #[test]
    fn nested_badges_buttons_and_user() {
        let props = Props::from_json(
            r##"{
                "title": "Post",
                "withDivider": true,
                "badges": [{"label": "new", "color": "green"}, {"color": "red"}, {"label": "bad", "color": "plaid"}],
                "actions": [{"label": "Read", "href": "/post"}],
                "icons": [{"iconName": "heart", "value": "12", "route": "likes"}],
                "user": {"text": "jd"}
            }"##,
        )
        .unwrap();
        let html = card(props).render();
        assert_eq!(html.matches("ui-badge").count(), 1);
        assert!(html.contains("id=\"c1-badge-0\""));
        assert!(html.contains("<hr class=\"border-gray-200\" />"));
        assert!(html.contains("<a href=\"/post\"><button"));
        assert!(html.contains("<a class=\"hover:opacity-80 transition-opacity\" href=\"#likes\">"));
        assert!(html.contains("<span class=\"text-sm text-gray-600\">12</span>"));
        assert!(html.contains(">JD</span>"));
    }
}
