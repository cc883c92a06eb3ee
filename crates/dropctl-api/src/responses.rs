//! Response envelopes for the API

use serde::{Deserialize, Serialize};

use crate::models::{Droplet, SshKey};

/// `GET /v2/droplets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletsResponse {
    pub droplets: Vec<Droplet>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// `POST /v2/droplets` and `GET /v2/droplets/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletResponse {
    pub droplet: Droplet,
}

/// `GET /v2/account/keys`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysResponse {
    pub ssh_keys: Vec<SshKey>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub pages: Option<Pages>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pages {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    pub total: u64,
}

/// Error document returned with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code such as `not_found` or `unauthorized`
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}
