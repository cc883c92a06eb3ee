//! Request types for the API

use serde::{Serialize, Serializer};

use crate::models::SshKey;

/// Body of `POST /v2/droplets`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropletCreateRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: DropletCreateImage,
    pub ssh_keys: Vec<DropletCreateSshKey>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Image reference for droplet creation
///
/// Serialized as the slug when one is set, otherwise as the numeric image id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropletCreateImage {
    pub id: u64,
    pub slug: String,
}

impl DropletCreateImage {
    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            id: 0,
            slug: slug.into(),
        }
    }

    #[must_use]
    pub fn id(id: u64) -> Self {
        Self {
            id,
            slug: String::new(),
        }
    }
}

impl Serialize for DropletCreateImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.slug.is_empty() {
            serializer.serialize_u64(self.id)
        } else {
            serializer.serialize_str(&self.slug)
        }
    }
}

/// SSH key reference for droplet creation
///
/// Serialized as the numeric key id when non-zero, otherwise as the fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropletCreateSshKey {
    pub id: u64,
    pub fingerprint: String,
}

impl From<&SshKey> for DropletCreateSshKey {
    fn from(key: &SshKey) -> Self {
        Self {
            id: key.id,
            fingerprint: key.fingerprint.clone(),
        }
    }
}

impl Serialize for DropletCreateSshKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.id == 0 {
            serializer.serialize_str(&self.fingerprint)
        } else {
            serializer.serialize_u64(self.id)
        }
    }
}
