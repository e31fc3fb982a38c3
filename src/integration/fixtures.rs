//! Test fixtures for integration tests
//!
//! Builds manifest trees resembling real DASH Periods without an XML parser.

use crate::annotate::AnnotatedSet;
use crate::manifest::Element;
use crate::variant::{AudioTrack, Variant, VideoTrack};

/// Audio adaptation set description
#[derive(Debug, Clone)]
pub struct TestAudioSet {
    pub id: &'static str,
    pub language: &'static str,
    pub roles: Vec<&'static str>,
    pub accessible: bool,
    pub representations: Vec<&'static str>,
}

impl TestAudioSet {
    /// Regular audio with no roles declared
    pub fn plain(id: &'static str, language: &'static str) -> Self {
        Self {
            id,
            language,
            roles: vec![],
            accessible: false,
            representations: vec![id],
        }
    }

    /// Audio description track flagged with an Accessibility descriptor,
    /// mislabelled "main" as some packagers do
    pub fn described(id: &'static str, language: &'static str) -> Self {
        Self {
            id,
            language,
            roles: vec!["main"],
            accessible: true,
            representations: vec![id],
        }
    }

    pub fn to_element(&self) -> Element {
        let mut set = Element::new("AdaptationSet")
            .with_attribute("id", self.id)
            .with_attribute("contentType", "audio")
            .with_attribute("mimeType", "audio/mp4")
            .with_attribute("lang", self.language);

        for role in &self.roles {
            set.push_child(
                Element::new("Role")
                    .with_attribute("schemeIdUri", "urn:mpeg:dash:role:2011")
                    .with_attribute("value", *role),
            );
        }
        if self.accessible {
            set.push_child(
                Element::new("Accessibility")
                    .with_attribute("schemeIdUri", "urn:tva:metadata:cs:AudioPurposeCS:2007")
                    .with_attribute("value", "1"),
            );
        }
        for rep in &self.representations {
            set.push_child(
                Element::new("Representation")
                    .with_attribute("id", *rep)
                    .with_attribute("bandwidth", "128000"),
            );
        }
        set
    }
}

/// Single 1080p video adaptation set
pub fn video_set() -> Element {
    Element::new("AdaptationSet")
        .with_attribute("id", "video")
        .with_attribute("contentType", "video")
        .with_attribute("mimeType", "video/mp4")
        .with_child(
            Element::new("Representation")
                .with_attribute("id", "video-1080")
                .with_attribute("width", "1920")
                .with_attribute("height", "1080"),
        )
}

/// Period holding the video set followed by the given audio sets
pub fn period(audio: &[TestAudioSet]) -> Element {
    let mut period = Element::new("Period").with_child(video_set());
    for set in audio {
        period.push_child(set.to_element());
    }
    period
}

/// Pair every annotated audio representation with the video track.
///
/// Variant language starts out as `default_language`, the stale value the
/// language pass is expected to correct.
pub fn build_variants(sets: &[AnnotatedSet], default_language: &str) -> Vec<Variant> {
    let video = VideoTrack {
        id: "video-1080".to_string(),
        width: 1920,
        height: 1080,
    };

    sets.iter()
        .filter(|s| s.is_audio())
        .flat_map(|set| {
            set.representations
                .iter()
                .map(move |rep| AudioTrack::from_representation(set, rep))
        })
        .enumerate()
        .map(|(i, audio)| Variant {
            id: i as u32,
            language: default_language.to_string(),
            audio: Some(audio),
            video: Some(video.clone()),
        })
        .collect()
}
