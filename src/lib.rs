//! Manifest role fix-ups
//!
//! Post-processing for parsed DASH manifests that keeps accessibility audio
//! (audio description, commentary) out of the preferred "main" pool, and
//! keeps each variant's display language in step with its audio track.

pub mod annotate;
pub mod config;
pub mod config_file;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod roles;
pub mod variant;

#[cfg(test)]
pub(crate) mod integration;

pub use annotate::{annotate_adaptation_set, annotate_period, AnnotatedRepresentation, AnnotatedSet};
pub use config::{LogFormat, LoggingConfig, MainRoleRule, ReconcileConfig, RolesConfig};
pub use error::{Result, RoleError};
pub use manifest::{Element, ManifestElement};
pub use roles::{
    contains_role, has_accessibility_tag, has_accessibility_tag_opt, reconcile_roles,
    remove_all, roles_of, without_role, RoleReconciler, COMMENTARY_ROLE, MAIN_ROLE,
};
pub use variant::{apply_audio_language, AudioTrack, Variant, VideoTrack};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
