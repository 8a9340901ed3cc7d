//! Rendered markup as an arena tree: build, walk, serialize.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use super::node::{Element, Node};
use crate::style::ClassList;

new_key_type! {
    /// Identifier of a node in a [`Document`].
    pub struct NodeId;
}

const EMPTY_CHILDREN: &[NodeId] = &[];

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "embed", "hr", "img", "input", "meta", "source", "wbr"];

/// Data stored for each node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Element {
        tag: String,
        attrs: Vec<(String, Option<String>)>,
        classes: ClassList,
    },
    Text(String),
    Raw(String),
}

impl NodeData {
    pub fn tag(&self) -> Option<&str> {
        match self {
            NodeData::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Attribute value; boolean attributes read as `""`. `class` reads the
    /// joined class list.
    pub fn attr(&self, name: &str) -> Option<String> {
        let NodeData::Element { attrs, classes, .. } = self else {
            return None;
        };
        if name == "class" {
            return (!classes.is_empty()).then(|| classes.to_string());
        }
        attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone().unwrap_or_default())
    }

    pub fn has_class(&self, class: &str) -> bool {
        matches!(self, NodeData::Element { classes, .. } if classes.contains(class))
    }
}

/// A rendered component as a tree of nodes in a slotmap arena.
///
/// Built once from an [`Element`] template and then read: queried by tests
/// and the pilot, serialized by `render`.
#[derive(Debug, Default)]
pub struct Document {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    roots: Vec<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a template. A fragment contributes its
    /// children as top-level nodes.
    pub fn from_element(element: &Element) -> Self {
        let mut doc = Self::new();
        if element.is_fragment() {
            for child in element.child_nodes() {
                doc.append(None, child);
            }
        } else {
            doc.append_element(None, element);
        }
        doc
    }

    fn append(&mut self, parent: Option<NodeId>, node: &Node) {
        match node {
            Node::Element(el) if el.is_fragment() => {
                for child in el.child_nodes() {
                    self.append(parent, child);
                }
            }
            Node::Element(el) => {
                self.append_element(parent, el);
            }
            Node::Text(text) => {
                self.insert(parent, NodeData::Text(text.clone()));
            }
            Node::Raw(markup) => {
                self.insert(parent, NodeData::Raw(markup.clone()));
            }
        }
    }

    fn append_element(&mut self, parent: Option<NodeId>, el: &Element) -> NodeId {
        let id = self.insert(
            parent,
            NodeData::Element {
                tag: el.tag().to_owned(),
                attrs: el.attrs().to_vec(),
                classes: el.class_list().clone(),
            },
        );
        for child in el.child_nodes() {
            self.append(Some(id), child);
        }
        id
    }

    /// Insert a node under `parent`, or as a new top-level node.
    pub fn insert(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        match parent {
            Some(p) => {
                self.parent.insert(id, p);
                if let Some(siblings) = self.children.get_mut(p) {
                    siblings.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    // -- Navigation -------------------------------------------------------

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Top-level nodes in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The first top-level node.
    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors of `id`, nearest first. Does not include `id`.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Pre-order walk of the subtree rooted at `start`, `start` included.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Every node in document order.
    pub fn walk(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| self.walk_depth_first(root))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text of a subtree, trimmed.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.walk_depth_first(id) {
            if let Some(NodeData::Text(text)) = self.nodes.get(node) {
                out.push_str(text);
            }
        }
        out.trim().to_owned()
    }

    // -- Serialization ----------------------------------------------------

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            self.write_node(root, &mut out);
        }
        out
    }

    /// Serialize one subtree.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(data) = self.nodes.get(id) else {
            return;
        };
        match data {
            NodeData::Text(text) => escape_into(text, false, out),
            NodeData::Raw(markup) => out.push_str(markup),
            NodeData::Element {
                tag,
                attrs,
                classes,
            } => {
                out.push('<');
                out.push_str(tag);
                if !classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_into(&classes.to_string(), true, out);
                    out.push('"');
                }
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    if let Some(value) = value {
                        out.push_str("=\"");
                        escape_into(value, true, out);
                        out.push('"');
                    }
                }
                if VOID_TAGS.contains(&tag.as_str()) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for &child in self.children(id) {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
