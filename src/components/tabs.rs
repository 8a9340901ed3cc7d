//! Tab strip with optional content panels.

use std::any::Any;

use tracing::debug;

use super::checkbox_radio::Orientation;
use super::icon::{Icon, IconSize};
use crate::action::{ActionArg, ActionCall};
use crate::component::{text_arg, Base, Component};
use crate::error::{Result, UiError};
use crate::event::TabChanged;
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{Field, Props, StateValue};
use crate::style::{compose, ClassList, Color, Size, TabVariant};

/// One tab as read from the `tabs` list. Bare strings are labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub disabled: bool,
    pub content: String,
}

impl Tab {
    fn from_state(index: usize, entry: &StateValue) -> Self {
        match entry {
            StateValue::Map(_) => Self {
                id: entry.get_text("id").unwrap_or_else(|| format!("tab-{index}")),
                label: entry
                    .get_text("label")
                    .or_else(|| entry.get_text("title"))
                    .unwrap_or_else(|| format!("Tab {index}")),
                icon: entry.get_text("icon").unwrap_or_default(),
                disabled: entry.get("disabled").and_then(StateValue::as_bool).unwrap_or(false),
                content: entry.get_text("content").unwrap_or_default(),
            },
            other => Self {
                id: format!("tab-{index}"),
                label: other.to_text(),
                icon: String::new(),
                disabled: false,
                content: String::new(),
            },
        }
    }
}

/// Tabs. `active` is an index; a non-numeric `active` prop names a tab id and
/// is resolved to its index at construction (`-1` when no tab matches).
pub struct Tabs {
    base: Base,
}

impl Tabs {
    pub fn new(ctx: &UiContext, id: &str, props: Props) -> Result<Self> {
        let mut base = Base::new(ctx, "tabs", id);
        let s = &mut base.state;
        s.declare("tabs", Field::new(StateValue::empty_list()))?;
        s.declare("active", Field::new(0))?;
        s.declare("fullWidth", Field::new(false))?;
        s.declare("pill", Field::new(false))?;
        s.declare("showContent", Field::new(true))?;
        s.declare("variant", Field::token(TabVariant::Underline))?;
        s.declare("size", Field::token(Size::Normal))?;
        s.declare("orientation", Field::token(Orientation::Horizontal))?;
        s.declare("color", Field::token(Color::Indigo))?;
        base.apply(&resolve_active(props))?;
        Ok(Self { base })
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.base
            .state
            .list("tabs")
            .iter()
            .enumerate()
            .map(|(index, entry)| Tab::from_state(index, entry))
            .collect()
    }

    pub fn active_index(&self) -> Option<usize> {
        usize::try_from(self.base.state.int("active")).ok()
    }

    pub fn switch_tab(&mut self, tab_id: &str, index: usize) -> Result<()> {
        let active = i64::try_from(index).map_err(|_| UiError::InvalidArguments {
            action: "switchTab".to_owned(),
            message: format!("index {index} out of range"),
        })?;
        self.base.state.set("active", active)?;
        let tab = self
            .base
            .state
            .list("tabs")
            .get(index)
            .map(StateValue::to_json)
            .unwrap_or(serde_json::Value::Null);
        debug!(id = %self.base.id, tab_id, index, "tab switched");
        self.base.emit(TabChanged {
            tab_id: tab_id.to_owned(),
            index,
            tab,
        });
        Ok(())
    }

    fn vertical(&self) -> bool {
        self.base.state.token::<Orientation>("orientation") == Orientation::Vertical
    }

    fn list_classes(&self) -> ClassList {
        let s = &self.base.state;
        let full = s.bool("fullWidth");
        let classes = if self.vertical() {
            ClassList::new().with("flex flex-col space-y-1").with_if(full, "w-full")
        } else {
            ClassList::new()
                .with("flex")
                .with(if full { "w-full" } else { "space-x-1" })
        };
        match s.token::<TabVariant>("variant") {
            TabVariant::Underline if self.vertical() => classes.with("border-r border-gray-200"),
            TabVariant::Underline => classes.with("border-b border-gray-200"),
            TabVariant::Bordered => classes.with("border border-gray-200 rounded-lg p-1 bg-gray-50"),
            TabVariant::Pills => classes,
        }
    }

    fn tab_classes(&self, active: bool, disabled: bool) -> ClassList {
        let s = &self.base.state;
        let color: Color = s.token("color");
        let variant: TabVariant = s.token("variant");
        let edge = if self.vertical() { "border-r-2" } else { "border-b-2" };
        let inactive = "text-gray-500 hover:text-gray-700";
        let classes = ClassList::new()
            .with("relative inline-flex items-center justify-center font-medium transition-all duration-300")
            .with(match s.token::<Size>("size") {
                Size::Small => "px-3 py-1.5 text-xs",
                Size::Large => "px-6 py-3 text-lg",
                Size::Normal => "px-4 py-2 text-sm",
            })
            .with_if(s.bool("fullWidth"), "flex-1");
        let classes = match variant {
            TabVariant::Underline if active => classes.with(&compose::tab_active(color, variant)).with(edge),
            TabVariant::Underline => classes
                .with(inactive)
                .with(edge)
                .with("border-transparent hover:border-gray-300"),
            TabVariant::Pills | TabVariant::Bordered => {
                let shape = if variant == TabVariant::Pills && s.bool("pill") {
                    "rounded-full"
                } else {
                    "rounded-md"
                };
                let classes = classes.with(shape);
                if active {
                    classes.with(&compose::tab_active(color, variant))
                } else {
                    classes.with(inactive).with("hover:bg-gray-100")
                }
            }
        };
        classes
            .with(&compose::focus_ring(color))
            .with(if disabled {
                "opacity-50 cursor-not-allowed pointer-events-none"
            } else {
                "cursor-pointer"
            })
    }

    fn tab_button(&self, index: usize, tab: &Tab, active: bool) -> Element {
        let icon = (!tab.icon.is_empty()).then(|| {
            let size = match self.base.state.token::<Size>("size") {
                Size::Small => IconSize::Four,
                Size::Large => IconSize::Six,
                Size::Normal => IconSize::Five,
            };
            Icon::inline(&self.base.ctx, &tab.icon, Default::default(), size, "mr-2")
        });
        Element::new("button")
            .attr("type", "button")
            .attr("role", "tab")
            .attr("aria-selected", active.to_string())
            .attr("aria-controls", format!("tabpanel-{}", tab.id))
            .id(format!("tab-{}", tab.id))
            .classes(&self.tab_classes(active, tab.disabled))
            .attr(
                "data-action-click",
                ActionCall::new("switchTab").arg(tab.id.as_str()).arg(index).to_string(),
            )
            .flag_if(tab.disabled, "disabled")
            .child_opt(icon)
            .text(tab.label.as_str())
    }

    fn panels(&self, tabs: &[Tab]) -> Option<Element> {
        if !self.base.state.bool("showContent") || tabs.is_empty() {
            return None;
        }
        let active = self.active_index();
        let panels = tabs.iter().enumerate().map(|(index, tab)| {
            Element::new("div")
                .attr("role", "tabpanel")
                .id(format!("tabpanel-{}", tab.id))
                .attr("aria-labelledby", format!("tab-{}", tab.id))
                .class(if active == Some(index) { "block" } else { "hidden" })
                .text(tab.content.as_str())
        });
        Some(
            Element::new("div")
                .class("mt-4")
                .class_if(self.vertical(), "flex-1 ml-4")
                .children(panels),
        )
    }
}

/// Turn a tab-id `active` prop into the matching index.
fn resolve_active(props: Props) -> Props {
    let Some(StateValue::Str(active)) = props.get("active") else {
        return props;
    };
    if active.trim().parse::<i64>().is_ok() {
        return props;
    }
    let index = props
        .get("tabs")
        .and_then(StateValue::as_list)
        .and_then(|tabs| {
            tabs.iter()
                .position(|tab| tab.get_text("id").as_deref() == Some(active.as_str()))
        })
        .and_then(|index| i64::try_from(index).ok())
        .unwrap_or(-1);
    let mut resolved = Props::new();
    for (name, value) in props.iter() {
        if name == "active" {
            resolved.insert(name, index);
        } else {
            resolved.insert(name, value.clone());
        }
    }
    resolved
}

impl Component for Tabs {
    fn base(&self) -> &Base {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    fn template(&self) -> Element {
        let orientation = self.base.state.str("orientation");
        let tabs = self.tabs();
        let active = self.active_index();
        let buttons = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| self.tab_button(index, tab, active == Some(index)));
        Element::new("div")
            .class("ui-tabs flex flex-col")
            .attr("data-orientation", orientation)
            .child(
                Element::new("div")
                    .class_if(self.vertical(), "flex")
                    .child(
                        Element::new("div")
                            .attr("role", "tablist")
                            .attr("aria-orientation", orientation)
                            .classes(&self.list_classes())
                            .children(buttons),
                    )
                    .child_opt(self.panels(&tabs)),
            )
    }

    fn dispatch(&mut self, action: &str, args: &[ActionArg]) -> Result<()> {
        match action {
            "switchTab" => {
                let tab_id = text_arg(action, args, 0)?;
                let index = args
                    .get(1)
                    .and_then(ActionArg::as_int)
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| UiError::InvalidArguments {
                        action: action.to_owned(),
                        message: "expected a tab index".to_owned(),
                    })?;
                self.switch_tab(&tab_id, index)
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
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tabs(props: Props) -> Tabs {
        Tabs::new(&testing::context().unwrap(), "t", props).unwrap()
    }

    fn three() -> Props {
        Props::from_json(
            r#"{"tabs": [
                {"id": "home", "label": "Home", "content": "Welcome"},
                {"id": "docs", "title": "Docs", "icon": "book"},
                {"label": "Locked", "disabled": true}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn tab_definitions() {
        let t = tabs(three().set("tabs", vec!["A", "B"]));
        assert_eq!(t.tabs()[1].id, "tab-1");
        assert_eq!(t.tabs()[1].label, "B");

        let t = tabs(three());
        let list = t.tabs();
        assert_eq!(list[1].label, "Docs");
        assert_eq!(list[2].id, "tab-2");
        assert!(list[2].disabled);
    }

    #[test]
    fn renders_active_and_disabled_tabs() {
        let html = tabs(three()).render();
        assert!(html.contains("aria-selected=\"true\" aria-controls=\"tabpanel-home\" id=\"tab-home\""));
        assert!(html.contains("data-action-click=\"switchTab('docs', 1)\""));
        assert!(html.contains("opacity-50 cursor-not-allowed pointer-events-none"));
        assert!(html.contains("data-action-click=\"switchTab('tab-2', 2)\" disabled"));
        assert!(html.contains("<div class=\"block\" role=\"tabpanel\" id=\"tabpanel-home\" aria-labelledby=\"tab-home\">Welcome</div>"));
        assert!(html.contains("text-indigo-600 border-indigo-600 border-b-2"));
    }

    #[test]
    fn active_by_tab_id() {
        let t = tabs(three().set("active", "docs"));
        assert_eq!(t.active_index(), Some(1));
        let t = tabs(three().set("active", "missing"));
        assert_eq!(t.active_index(), None);
        let t = tabs(three().set("active", "2"));
        assert_eq!(t.active_index(), Some(2));
    }

    #[test]
    fn switch_tab_emits_definition() {
        let mut t = tabs(three());
        t.perform("switchTab('docs', 1)").unwrap();
        assert_eq!(t.active_index(), Some(1));
        let events = t.take_events();
        assert_eq!(events[0].name(), "tab-changed");
        assert_eq!(
            events[0].event.payload(),
            json!({"tabId": "docs", "index": 1, "tab": {"id": "docs", "title": "Docs", "icon": "book"}})
        );
        assert!(t.perform("switchTab('docs')").is_err());
    }

    #[test]
    fn vertical_pills() {
        let html = tabs(three().set("orientation", "vertical").set("variant", "pills").set("pill", true)).render();
        assert!(html.contains("data-orientation=\"vertical\""));
        assert!(html.contains("<div class=\"flex\"><div class=\"flex flex-col space-y-1\" role=\"tablist\""));
        assert!(html.contains("rounded-full bg-indigo-600 text-white"));
        assert!(html.contains("mt-4 flex-1 ml-4"));
    }
}
