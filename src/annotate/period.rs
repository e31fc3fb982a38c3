use tracing::debug;

use crate::manifest::ManifestElement;
use crate::roles::{has_accessibility_tag, roles_of, RoleReconciler};

const ADAPTATION_SET_TAG: &str = "AdaptationSet";
const REPRESENTATION_TAG: &str = "Representation";
const UNDETERMINED_LANGUAGE: &str = "und";

/// Reconciled roles of one Representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRepresentation {
    pub id: String,
    pub roles: Vec<String>,
    /// The Representation carries its own Accessibility child
    pub accessible: bool,
}

/// Reconciled roles of one AdaptationSet and its Representations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSet {
    pub id: String,
    pub content_type: String,
    /// `lang` attribute, "und" when missing
    pub language: String,
    pub roles: Vec<String>,
    /// The AdaptationSet carries an Accessibility child
    pub accessible: bool,
    pub representations: Vec<AnnotatedRepresentation>,
}

impl AnnotatedSet {
    /// Whether this set describes audio
    pub fn is_audio(&self) -> bool {
        self.content_type == "audio"
    }
}

fn attribute_or<E: ManifestElement + ?Sized>(element: &E, name: &str, default: &str) -> String {
    element.attribute(name).unwrap_or(default).to_string()
}

/// Content type from `contentType`, falling back to the `mimeType` prefix
fn content_type_of<E: ManifestElement + ?Sized>(element: &E) -> String {
    if let Some(content_type) = element.attribute("contentType") {
        return content_type.to_string();
    }
    element
        .attribute("mimeType")
        .and_then(|mime| mime.split('/').next())
        .unwrap_or_default()
        .to_string()
}

/// Reconcile roles for an AdaptationSet and each of its Representations.
///
/// A Representation starts from the set's declared roles plus its own
/// `Role` children. With its own Accessibility child it is reconciled
/// against itself; otherwise it is reconciled against the set, so a marked
/// set never lets "main" through.
pub fn annotate_adaptation_set<E: ManifestElement + ?Sized>(
    reconciler: &RoleReconciler,
    set: &E,
) -> AnnotatedSet {
    let declared = roles_of(set);
    let roles = reconciler.reconcile(&declared, set);

    let representations = set
        .find_children(REPRESENTATION_TAG)
        .into_iter()
        .map(|rep| {
            let accessible = has_accessibility_tag(rep);
            let mut input = declared.clone();
            input.extend(roles_of(rep));
            // The set's marker governs unless the Representation carries its own.
            let rep_roles = if accessible {
                reconciler.reconcile(&input, rep)
            } else {
                reconciler.reconcile(&input, set)
            };
            AnnotatedRepresentation {
                id: attribute_or(rep, "id", ""),
                roles: rep_roles,
                accessible,
            }
        })
        .collect();

    let annotated = AnnotatedSet {
        id: attribute_or(set, "id", ""),
        content_type: content_type_of(set),
        language: attribute_or(set, "lang", UNDETERMINED_LANGUAGE),
        roles,
        accessible: has_accessibility_tag(set),
        representations,
    };

    debug!(
        set = %annotated.id,
        language = %annotated.language,
        roles = ?annotated.roles,
        "annotated adaptation set"
    );
    annotated
}

/// Annotate every AdaptationSet of a Period, in document order.
pub fn annotate_period<E: ManifestElement + ?Sized>(
    reconciler: &RoleReconciler,
    period: &E,
) -> Vec<AnnotatedSet> {
    period
        .find_children(ADAPTATION_SET_TAG)
        .into_iter()
        .map(|set| annotate_adaptation_set(reconciler, set))
        .collect()
}
