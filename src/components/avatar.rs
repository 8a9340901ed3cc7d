//! Avatar: an image, or initials on a coloured background.

use std::any::Any;

use crate::action::ActionArg;
use crate::component::{Base, Component};
use crate::error::Result;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props};
use crate::style::{compose, token_enum, AvatarVariant, ClassList, Color};

token_enum! {
    pub enum AvatarSize {
        Tiny => "tiny",
        Small => "small",
        Normal => "normal",
        Large => "large",
        Huge => "huge",
    }
    default Normal
}

token_enum! {
    pub enum AvatarShape {
        Circle => "circle",
        Square => "square",
        Rounded => "rounded",
    }
    default Circle
}

token_enum! {
    pub enum Status {
        None => "",
        Online => "online",
        Offline => "offline",
        Busy => "busy",
        Away => "away",
    }
    default None
}

/// Up to two upper-case letters: explicit initials, else the first letters of
/// the first two name parts, else the first two letters of the name.
pub fn initials(explicit: &str, name: &str) -> String {
    if !explicit.is_empty() {
        return explicit.chars().take(2).collect::<String>().to_uppercase();
    }
    let mut parts = name.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
        (Some(only), None) => only.chars().take(2).collect::<String>().to_uppercase(),
        _ => "AN".to_owned(),
    }
}

pub struct Avatar {
    base: Base,
}

impl Avatar {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "avatar", id);
        let s = &mut base.state;
        s.declare("src", Field::new(""))?;
        s.declare("alt", Field::new(""))?;
        s.declare("initials", Field::new(""))?;
        s.declare("name", Field::new(""))?;
        s.declare("border", Field::new(false))?;
        s.declare("notification", Field::new(""))?;
        s.declare("clickable", Field::new(false))?;
        s.declare("size", Field::token(AvatarSize::Normal))?;
        s.declare("shape", Field::token(AvatarShape::Circle))?;
        s.declare("color", Field::token(Color::Indigo))?;
        s.declare("variant", Field::token(AvatarVariant::Filled))?;
        s.declare("status", Field::token(Status::None))?;
        base.apply(&props)?;
        Ok(Self { base })
    }

    fn size(&self) -> AvatarSize {
        self.base.state.token("size")
    }

    fn avatar_classes(&self) -> ClassList {
        let s = &self.base.state;
        let size = match self.size() {
            AvatarSize::Tiny => "w-6 h-6 text-xs",
            AvatarSize::Small => "w-8 h-8 text-sm",
            AvatarSize::Large => "w-16 h-16 text-2xl",
            AvatarSize::Huge => "w-24 h-24 text-4xl",
            AvatarSize::Normal => "w-10 h-10 text-base",
        };
        let shape = match s.token::<AvatarShape>("shape") {
            AvatarShape::Square => "",
            AvatarShape::Rounded => "rounded-lg",
            AvatarShape::Circle => "rounded-full",
        };
        let fill = if s.str("src").is_empty() {
            compose::avatar(s.token("color"), s.token("variant"))
        } else {
            "bg-gray-100".to_owned()
        };
        ClassList::new()
            .with("inline-flex items-center justify-center font-semibold relative overflow-hidden")
            .with(size)
            .with(shape)
            .with(&fill)
            .with_if(s.bool("border"), "ring-2 ring-white")
            .with_if(
                s.bool("clickable"),
                "cursor-pointer hover:opacity-80 transition-opacity duration-200",
            )
    }

    fn status(&self) -> Option<Element> {
        let status = self.base.state.token::<Status>("status");
        if status == Status::None {
            return None;
        }
        let (dot, position) = match self.size() {
            AvatarSize::Tiny => ("w-1.5 h-1.5", "bottom-0 right-0"),
            AvatarSize::Small => ("w-2 h-2", "bottom-0 right-0"),
            AvatarSize::Large => ("w-4 h-4", "bottom-1 right-1"),
            AvatarSize::Huge => ("w-6 h-6", "bottom-2 right-2"),
            AvatarSize::Normal => ("w-3 h-3", "bottom-0.5 right-0.5"),
        };
        let color = match status {
            Status::Online => "bg-green-500",
            Status::Busy => "bg-red-500",
            Status::Away => "bg-yellow-500",
            Status::Offline | Status::None => "bg-gray-400",
        };
        Some(
            Element::new("span")
                .class("absolute")
                .class(position)
                .class(dot)
                .class(color)
                .class("rounded-full ring-2 ring-white")
                .attr("aria-label", format!("Status: {status}")),
        )
    }

    fn notification(&self) -> Option<Element> {
        let count = self.base.state.str("notification");
        if count.is_empty() {
            return None;
        }
        let (size, position) = match self.size() {
            AvatarSize::Tiny => ("w-3 h-3 text-xs", "-top-1 -right-1"),
            AvatarSize::Small => ("w-4 h-4 text-xs", "-top-1 -right-1"),
            AvatarSize::Large => ("w-6 h-6 text-sm", "-top-2 -right-2"),
            AvatarSize::Huge => ("w-8 h-8 text-base", "-top-3 -right-3"),
            AvatarSize::Normal => ("w-5 h-5 text-xs", "-top-2 -right-2"),
        };
        Some(
            Element::new("span")
                .class("absolute")
                .class(position)
                .class(size)
                .class("bg-red-500 text-white rounded-full flex items-center justify-center font-bold ring-2 ring-white")
                .attr("aria-label", format!("Notifications: {count}"))
                .text(count),
        )
    }
}

impl Component for Avatar {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let s = &self.base.state;
        let src = s.str("src");
        let content = if src.is_empty() {
            Element::new("span")
                .class("text-current select-none")
                .text(initials(s.str("initials"), s.str("name")))
        } else {
            let alt = [s.str("alt"), s.str("name")]
                .into_iter()
                .find(|a| !a.is_empty())
                .unwrap_or("Avatar");
            Element::new("img")
                .attr("src", src)
                .attr("alt", alt)
                .class("w-full h-full object-cover")
                .attr("loading", "lazy")
        };
        let clickable = s.bool("clickable");
        Element::new("div")
            .class("ui-avatar inline-block relative")
            .child(
                Element::new("div")
                    .classes(&self.avatar_classes())
                    .attr_if(clickable, "role", "button")
                    .attr_if(clickable, "tabindex", "0")
                    .child(content),
            )
            .child_opt(self.status())
            .child_opt(self.notification())
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
