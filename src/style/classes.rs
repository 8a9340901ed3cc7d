//! Ordered, de-duplicated class lists.

use std::fmt;

/// An ordered list of CSS classes with set semantics.
///
/// Inputs are whitespace-separated class strings, so composed fragments like
/// `"border border-slate-300"` can be pushed directly. The first occurrence
/// of a class wins its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add classes (builder).
    pub fn with(mut self, classes: &str) -> Self {
        self.push(classes);
        self
    }

    /// Add classes when `condition` holds (builder).
    pub fn with_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.with(classes)
        } else {
            self
        }
    }

    /// Add classes in place. Duplicates and empty fragments are skipped.
    pub fn push(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.contains(class) {
                self.classes.push(class.to_owned());
            }
        }
    }

    /// Append every class of another list.
    pub fn extend(&mut self, other: &ClassList) {
        for class in &other.classes {
            if !self.contains(class) {
                self.classes.push(class.clone());
            }
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        ClassList::new().with(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        ClassList::new().with(&classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_dedups() {
        let list = ClassList::new()
            .with("flex items-center py-2")
            .with("text-sm px-4 py-2");
        assert_eq!(list.to_string(), "flex items-center py-2 text-sm px-4");
    }

    #[test]
    fn conditional_push() {
        let list = ClassList::new()
            .with("a")
            .with_if(false, "b")
            .with_if(true, "c");
        assert_eq!(list.to_string(), "a c");
    }

    #[test]
    fn empty_fragments_are_ignored() {
        let list = ClassList::from("  ").with("");
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn remove_and_contains() {
        let mut list = ClassList::from("a b c");
        list.remove("b");
        assert!(!list.contains("b"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn extend_keeps_first_position() {
        let mut list = ClassList::from("a b");
        list.extend(&ClassList::from("b c"));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
