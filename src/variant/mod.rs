//! Variant post-processing
//!
//! Variants are built by the manifest pipeline; this module only holds their
//! shape and the pass that keeps a variant's language in step with the audio
//! it actually plays.

pub mod language;
pub mod types;

pub use language::apply_audio_language;
pub use types::{AudioTrack, Variant, VideoTrack};
