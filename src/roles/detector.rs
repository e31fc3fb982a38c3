//! Accessibility marker detection

use crate::manifest::{ManifestElement, ACCESSIBILITY_TAG, ROLE_TAG};

/// True if `element` has at least one direct `Accessibility` child.
///
/// Works on AdaptationSet and Representation nodes alike.
pub fn has_accessibility_tag<E: ManifestElement + ?Sized>(element: &E) -> bool {
    !element.find_children(ACCESSIBILITY_TAG).is_empty()
}

/// Like [`has_accessibility_tag`], treating a missing element as unmarked.
pub fn has_accessibility_tag_opt<E: ManifestElement + ?Sized>(element: Option<&E>) -> bool {
    element.map_or(false, has_accessibility_tag)
}

/// Role values declared by `element`'s direct `Role` children, in document
/// order. Role descriptors without a `value` attribute are skipped.
pub fn roles_of<E: ManifestElement + ?Sized>(element: &E) -> Vec<String> {
    element
        .find_children(ROLE_TAG)
        .into_iter()
        .filter_map(|role| role.attribute("value"))
        .map(str::to_string)
        .collect()
}
