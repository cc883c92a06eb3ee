//! Remote droplet API trait

use async_trait::async_trait;
use dropctl_api::{Droplet, DropletCreateRequest, SshKey};

use crate::error::Result;

/// The four provider calls the droplet operations are built from
///
/// Implemented by [`HttpClient`](crate::HttpClient) against the real API; the
/// operations in [`droplet`](crate::droplet) only depend on this trait.
#[async_trait]
pub trait DropletApi: Send + Sync {
    /// List droplets visible to the account (first page only)
    async fn list_droplets(&self) -> Result<Vec<Droplet>>;

    /// List SSH keys registered on the account (first page only)
    async fn list_keys(&self) -> Result<Vec<SshKey>>;

    /// Provision a new droplet
    async fn create_droplet(&self, request: &DropletCreateRequest) -> Result<Droplet>;

    /// Destroy a droplet by id
    async fn delete_droplet(&self, id: u64) -> Result<()>;
}
