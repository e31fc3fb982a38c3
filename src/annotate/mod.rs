//! Adaptation-set role annotation
//!
//! Runs the role reconciler over a Period the way the manifest pipeline
//! does while building variants: once per AdaptationSet and once per
//! Representation.

pub mod period;

pub use period::{
    annotate_adaptation_set, annotate_period, AnnotatedRepresentation, AnnotatedSet,
};
