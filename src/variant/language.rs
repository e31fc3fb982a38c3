//! Variant language fix-up

use tracing::debug;

use super::Variant;

/// Overwrite each variant's language with its audio track's language.
///
/// Variants without audio are left alone. Returns how many variants
/// changed language.
pub fn apply_audio_language(variants: &mut [Variant]) -> usize {
    let mut changed = 0;

    for variant in variants.iter_mut() {
        let Some(audio) = variant.audio.as_ref() else {
            continue;
        };
        if variant.language != audio.language {
            debug!(
                variant = variant.id,
                from = %variant.language,
                to = %audio.language,
                "variant language taken from audio track"
            );
            variant.language = audio.language.clone();
            changed += 1;
        }
    }

    changed
}
