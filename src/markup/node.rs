//! Owned markup nodes built by component templates.

use crate::style::ClassList;

/// A markup node: an element, escaped text, or trusted raw markup.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup inserted verbatim (resolved icon SVG).
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element under construction.
///
/// Attributes keep insertion order. A `None` attribute value renders as a
/// bare boolean attribute (`disabled`). An element with an empty tag is a
/// fragment: only its children are rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, Option<String>)>,
    classes: ClassList,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// A tagless container whose children render in sequence.
    pub fn fragment() -> Self {
        Self::default()
    }

    // -- Builders ---------------------------------------------------------

    /// Set the `id` attribute (builder).
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add whitespace-separated classes (builder).
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.push(classes);
        self
    }

    /// Add classes when `condition` holds (builder).
    pub fn class_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.class(classes)
        } else {
            self
        }
    }

    /// Add every class of a composed list (builder).
    pub fn classes(mut self, classes: &ClassList) -> Self {
        self.classes.extend(classes);
        self
    }

    /// Set an attribute, replacing any earlier value (builder).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), Some(value.into()));
        self
    }

    /// Set an attribute when `condition` holds (builder).
    pub fn attr_if(self, condition: bool, name: &str, value: impl Into<String>) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    /// Set a valueless boolean attribute (builder).
    pub fn flag(self, name: &str) -> Self {
        self.flag_if(true, name)
    }

    /// Set a valueless boolean attribute when `condition` holds (builder).
    pub fn flag_if(mut self, condition: bool, name: &str) -> Self {
        if condition {
            self.set_attr(name.to_owned(), None);
        }
        self
    }

    /// Append a child node (builder).
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child when present (builder).
    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    /// Append several children (builder).
    pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append escaped text (builder).
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append trusted markup (builder).
    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    fn set_attr(&mut self, name: String, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    // -- In-place mutation ------------------------------------------------

    pub fn add_class(&mut self, classes: &str) {
        self.classes.push(classes);
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    // -- Accessors --------------------------------------------------------

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_fragment(&self) -> bool {
        self.tag.is_empty()
    }

    /// The value of an attribute. Boolean attributes read as `""`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn attrs(&self) -> &[(String, Option<String>)] {
        &self.attrs
    }

    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        super::Document::from_element(self).to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_attrs_in_order() {
        let el = Element::new("input")
            .attr("type", "text")
            .id("email")
            .flag_if(true, "disabled")
            .flag_if(false, "readonly");
        assert_eq!(el.get_attr("type"), Some("text"));
        assert_eq!(el.get_attr("id"), Some("email"));
        assert_eq!(el.get_attr("disabled"), Some(""));
        assert_eq!(el.get_attr("readonly"), None);
        let names: Vec<&str> = el.attrs().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["type", "id", "disabled"]);
    }

    #[test]
    fn attr_replaces_existing_value() {
        let el = Element::new("a").attr("href", "/a").attr("href", "/b");
        assert_eq!(el.get_attr("href"), Some("/b"));
        assert_eq!(el.attrs().len(), 1);
    }

    #[test]
    fn classes_dedup_across_calls() {
        let el = Element::new("div")
            .class("flex py-2")
            .class_if(true, "py-2 gap-2")
            .class_if(false, "hidden");
        assert_eq!(el.class_list().to_string(), "flex py-2 gap-2");
    }

    #[test]
    fn children_and_optional_children() {
        let el = Element::new("ul")
            .child(Element::new("li").text("a"))
            .child_opt(None::<Element>)
            .children(vec![Element::new("li"), Element::new("li")]);
        assert_eq!(el.child_nodes().len(), 3);
    }

    #[test]
    fn fragment_has_no_tag() {
        assert!(Element::fragment().is_fragment());
        assert!(!Element::new("div").is_fragment());
    }
}
