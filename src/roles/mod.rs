//! Accessibility-aware role handling
//!
//! This module decides which selection pool an adaptation or representation
//! set belongs to:
//! - Accessibility marker detection
//! - Role reconciliation ("main" vs "commentary")
//! - Role-list helpers

pub mod detector;
pub mod list;
pub mod reconciler;

pub use detector::{has_accessibility_tag, has_accessibility_tag_opt, roles_of};
pub use list::{contains_role, remove_all, without_role};
pub use reconciler::{reconcile_roles, RoleReconciler};

/// Role of the preferred, regular audio pool
pub const MAIN_ROLE: &str = "main";

/// Role of descriptive / commentary audio
pub const COMMENTARY_ROLE: &str = "commentary";
