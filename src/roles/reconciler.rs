//! Role reconciler - moves accessibility sets out of the "main" pool

use tracing::{debug, trace};

use super::detector::has_accessibility_tag;
use super::list::{contains_role, without_role};
use super::{COMMENTARY_ROLE, MAIN_ROLE};
use crate::config::{MainRoleRule, ReconcileConfig};
use crate::manifest::ManifestElement;

/// Applies the accessibility role policy to adaptation and representation
/// sets. Holds only policy; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct RoleReconciler {
    config: ReconcileConfig,
}

impl RoleReconciler {
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Produce the role list for `element` given the roles already attributed
    /// to it. The input list is never modified.
    ///
    /// With an `Accessibility` child, "main" is stripped and "commentary" is
    /// appended. Without one, "main" is appended when the configured
    /// [`MainRoleRule`] says the set has no competing role.
    pub fn reconcile<S, E>(&self, roles: &[S], element: &E) -> Vec<String>
    where
        S: AsRef<str>,
        E: ManifestElement + ?Sized,
    {
        let roles: Vec<String> = roles.iter().map(|r| r.as_ref().to_string()).collect();

        if has_accessibility_tag(element) {
            self.commentary_roles(roles)
        } else {
            self.regular_roles(roles)
        }
    }

    fn commentary_roles(&self, roles: Vec<String>) -> Vec<String> {
        let mut modified = if contains_role(&roles, MAIN_ROLE) {
            without_role(&roles, MAIN_ROLE)
        } else {
            roles
        };

        if self.config.dedupe_commentary && contains_role(&modified, COMMENTARY_ROLE) {
            trace!(roles = ?modified, "commentary role already present");
        } else {
            modified.push(COMMENTARY_ROLE.to_string());
        }

        debug!(roles = ?modified, "accessibility marker found, tagged as commentary");
        modified
    }

    fn regular_roles(&self, mut roles: Vec<String>) -> Vec<String> {
        let has_main = contains_role(&roles, MAIN_ROLE);
        let has_commentary = contains_role(&roles, COMMENTARY_ROLE);

        let add_main = match self.config.main_rule {
            MainRoleRule::NeitherPresent => !has_main && !has_commentary,
            MainRoleRule::UnlessBothPresent => !has_main || !has_commentary,
        };

        if add_main {
            roles.push(MAIN_ROLE.to_string());
            debug!(roles = ?roles, "no accessibility marker, defaulted to main");
        } else {
            trace!(roles = ?roles, "no accessibility marker, roles unchanged");
        }
        roles
    }
}

/// Reconcile `roles` for `element` with the default policy.
pub fn reconcile_roles<S, E>(roles: &[S], element: &E) -> Vec<String>
where
    S: AsRef<str>,
    E: ManifestElement + ?Sized,
{
    RoleReconciler::default().reconcile(roles, element)
}
