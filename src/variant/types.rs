use serde::{Deserialize, Serialize};

use crate::annotate::{AnnotatedRepresentation, AnnotatedSet};
use crate::roles::{contains_role, COMMENTARY_ROLE};

/// Audio track referenced by a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Representation id
    pub id: String,
    /// Language code (e.g., "en", "es")
    pub language: String,
    /// Reconciled roles
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AudioTrack {
    /// Build the track for one representation of an annotated audio set
    pub fn from_representation(set: &AnnotatedSet, rep: &AnnotatedRepresentation) -> Self {
        Self {
            id: rep.id.clone(),
            language: set.language.clone(),
            roles: rep.roles.clone(),
        }
    }

    /// Whether this track belongs to the commentary pool
    pub fn is_commentary(&self) -> bool {
        contains_role(&self.roles, COMMENTARY_ROLE)
    }
}

/// Video track referenced by a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoTrack {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

/// One playable combination of tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: u32,
    /// Display language
    pub language: String,
    pub audio: Option<AudioTrack>,
    pub video: Option<VideoTrack>,
}
