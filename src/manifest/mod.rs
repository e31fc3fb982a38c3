//! Manifest tree access
//!
//! The role logic only ever asks a manifest node for its children with a
//! given tag name. That capability is the [`ManifestElement`] trait, so any
//! parser's node type can be plugged in. [`Element`] is an owned tree that
//! implements it for callers without a parser of their own.

pub mod element;

pub use element::Element;

/// Tag name of the DASH accessibility descriptor
pub const ACCESSIBILITY_TAG: &str = "Accessibility";

/// Tag name of the DASH role descriptor
pub const ROLE_TAG: &str = "Role";

/// A node of a parsed manifest that can be queried for children by tag name.
pub trait ManifestElement {
    /// Direct children whose tag name equals `tag`, in document order.
    fn find_children(&self, tag: &str) -> Vec<&Self>;

    /// Value of the attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}
