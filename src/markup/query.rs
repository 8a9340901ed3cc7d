//! Query methods on [`Document`].

use super::document::{Document, NodeData, NodeId};

impl Document {
    /// Find the first element whose `id` attribute matches.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_nodes()
            .find(|(_, data)| data.attr("id").as_deref() == Some(id))
            .map(|(node, _)| node)
    }

    /// All elements carrying the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// All elements with the given tag.
    pub fn query_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.query_all(|data| data.tag() == Some(tag))
    }

    /// All elements that have an attribute, optionally with a given value.
    pub fn query_by_attr(&self, name: &str, value: Option<&str>) -> Vec<NodeId> {
        self.query_all(|data| match (data.attr(name), value) {
            (Some(found), Some(expected)) => found == expected,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }

    /// All nodes matching a predicate, in document order.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(id, _)| id)
            .collect()
    }

    /// Attribute value of a node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<String> {
        self.get(id).and_then(|data| data.attr(name))
    }

    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> + '_ {
        self.walk()
            .into_iter()
            .filter_map(move |id| self.get(id).map(|data| (id, data)))
    }
}

#[cfg(test)]
mod tests {
    use crate::markup::{Document, Element};

    fn doc() -> Document {
        let el = Element::new("div")
            .id("tabs")
            .child(
                Element::new("button")
                    .class("tab active")
                    .attr("data-action-click", "switchTab('a', 0)")
                    .text("A"),
            )
            .child(
                Element::new("button")
                    .class("tab")
                    .attr("data-action-click", "switchTab('b', 1)")
                    .text("B"),
            );
        Document::from_element(&el)
    }

    #[test]
    fn by_id() {
        let doc = doc();
        assert!(doc.query_by_id("tabs").is_some());
        assert!(doc.query_by_id("nope").is_none());
    }

    #[test]
    fn by_class_in_document_order() {
        let doc = doc();
        let tabs = doc.query_by_class("tab");
        assert_eq!(tabs.len(), 2);
        assert_eq!(doc.text_content(tabs[0]), "A");
        assert_eq!(doc.query_by_class("active").len(), 1);
    }

    #[test]
    fn by_tag_and_attr() {
        let doc = doc();
        assert_eq!(doc.query_by_tag("button").len(), 2);
        assert_eq!(doc.query_by_attr("data-action-click", None).len(), 2);
        let hits = doc.query_by_attr("data-action-click", Some("switchTab('b', 1)"));
        assert_eq!(hits.len(), 1);
        assert_eq!(doc.attr(hits[0], "class").as_deref(), Some("tab"));
    }
}
