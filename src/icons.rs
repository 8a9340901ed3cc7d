//! Icon resolution.
//!
//! Icons are Heroicons-style SVG files laid out as `{px}/{style}/{name}.svg`.
//! Resolvers return the raw SVG document; the icon component adds its size
//! classes to the root `<svg>` tag.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::trace;

use crate::style::token_enum;

token_enum! {
    /// Icon style and pixel grid.
    pub enum IconVariant {
        Outline => "outline",
        Solid => "solid",
        Mini => "mini",
        Micro => "micro",
    }
    default Outline
}

impl IconVariant {
    /// Directory holding this variant's SVG files.
    pub fn dir(self) -> &'static str {
        match self {
            IconVariant::Outline => "24/outline",
            IconVariant::Solid => "24/solid",
            IconVariant::Mini => "20/solid",
            IconVariant::Micro => "16/solid",
        }
    }
}

/// Looks icons up by kebab-case name and variant.
pub trait IconResolver: Send + Sync {
    /// The SVG markup for an icon, or `None` when it does not exist.
    fn resolve(&self, name: &str, variant: IconVariant) -> Option<String>;
}

// ---------------------------------------------------------------------------
// IconSet
// ---------------------------------------------------------------------------

/// An in-memory icon set.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: IndexMap<(IconVariant, String), String>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an icon (builder).
    pub fn with_icon(mut self, name: &str, variant: IconVariant, svg: impl Into<String>) -> Self {
        self.insert(name, variant, svg);
        self
    }

    pub fn insert(&mut self, name: &str, variant: IconVariant, svg: impl Into<String>) {
        self.icons.insert((variant, name.to_owned()), svg.into());
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconResolver for IconSet {
    fn resolve(&self, name: &str, variant: IconVariant) -> Option<String> {
        self.icons.get(&(variant, name.to_owned())).cloned()
    }
}

// ---------------------------------------------------------------------------
// IconDirectory
// ---------------------------------------------------------------------------

/// Icons read from a directory tree on each lookup.
#[derive(Debug, Clone)]
pub struct IconDirectory {
    root: PathBuf,
}

impl IconDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path an icon would be read from.
    pub fn path_for(&self, name: &str, variant: IconVariant) -> PathBuf {
        self.root.join(variant.dir()).join(format!("{name}.svg"))
    }
}

impl IconResolver for IconDirectory {
    fn resolve(&self, name: &str, variant: IconVariant) -> Option<String> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }
        let path = self.path_for(name, variant);
        match std::fs::read_to_string(&path) {
            Ok(svg) => Some(svg),
            Err(err) => {
                trace!(path = %path.display(), %err, "icon not found");
                None
            }
        }
    }
}

/// `arrowRight` → `arrow-right`. Already kebab-cased names pass through.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        prev = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_directories() {
        assert_eq!(IconVariant::Outline.dir(), "24/outline");
        assert_eq!(IconVariant::Mini.dir(), "20/solid");
        assert_eq!(IconVariant::Micro.dir(), "16/solid");
    }

    #[test]
    fn kebab_casing() {
        assert_eq!(kebab_case("arrowRight"), "arrow-right");
        assert_eq!(kebab_case("ChevronUpDown"), "chevron-up-down");
        assert_eq!(kebab_case("x-mark"), "x-mark");
        assert_eq!(kebab_case("h1Heading"), "h1-heading");
    }

    #[test]
    fn icon_set_lookup() {
        let set = IconSet::new().with_icon("check", IconVariant::Solid, "<svg></svg>");
        assert_eq!(set.resolve("check", IconVariant::Solid).as_deref(), Some("<svg></svg>"));
        assert_eq!(set.resolve("check", IconVariant::Outline), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn directory_paths_and_traversal() {
        let dir = IconDirectory::new("/icons");
        assert_eq!(
            dir.path_for("check", IconVariant::Micro),
            PathBuf::from("/icons/16/solid/check.svg")
        );
        assert_eq!(dir.resolve("../etc/passwd", IconVariant::Outline), None);
        assert_eq!(dir.resolve("does-not-exist", IconVariant::Outline), None);
    }
}
