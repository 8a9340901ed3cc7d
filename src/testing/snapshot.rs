//! Rendering helpers for snapshot-style assertions.

use crate::component::Component;
use crate::markup::Document;

/// Render a component to its HTML string.
///
/// ```ignore
/// use tailkit::testing::{context, render_to_string};
/// use tailkit::components::Badge;
/// use tailkit::state::Props;
///
/// let badge = Badge::new(&context()?, "b", Props::new().set("label", "New"))?;
/// insta::assert_snapshot!(render_to_string(&badge));
/// ```
pub fn render_to_string(component: &dyn Component) -> String {
    component.render()
}

/// Render a component into a queryable [`Document`].
pub fn document_of(component: &dyn Component) -> Document {
    Document::from_element(&component.template())
}
