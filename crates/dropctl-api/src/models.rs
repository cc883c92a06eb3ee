//! Resource models owned by the provider

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SSH key registered on the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub fingerprint: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub public_key: String,
}

/// Droplet (virtual machine instance)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    /// Memory in MB
    pub memory: u64,
    pub vcpus: u32,
    /// Disk size in GB
    pub disk: u64,
    /// One of "new", "active", "off", "archive"
    pub status: String,
    pub region: Region,
    pub size_slug: String,
    pub image: Image,
    pub networks: Networks,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Droplet {
    /// First public IPv4 address, if one has been assigned
    #[must_use]
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks
            .v4
            .iter()
            .find(|addr| addr.address_type == "public")
            .map(|addr| addr.ip_address.as_str())
    }
}

impl fmt::Display for Droplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id {}, region {}, size {}, image {}, status {})",
            self.name,
            self.id,
            self.region.slug,
            self.size_slug,
            self.image.slug.as_deref().unwrap_or(&self.image.name),
            self.status
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub slug: String,
    pub name: String,
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: u64,
    pub name: String,
    pub slug: Option<String>,
    pub distribution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Networks {
    pub v4: Vec<NetworkAddress>,
    pub v6: Vec<NetworkAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkAddress {
    pub ip_address: String,
    /// "public" or "private"
    #[serde(rename = "type")]
    pub address_type: String,
}
