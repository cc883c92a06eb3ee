//! Droplet operations: look up, create and delete a droplet by name

use tracing::{error, info};

use dropctl_api::{Droplet, DropletCreateImage, DropletCreateRequest, DropletCreateSshKey};

use crate::api::DropletApi;
use crate::error::{ClientError, Result};

/// Region, size, image and tags used for new droplets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropletTemplate {
    pub region: String,
    pub size: String,
    /// Image slug, or a numeric image id for custom images and snapshots
    pub image: String,
    pub tags: Vec<String>,
}

impl DropletTemplate {
    fn image(&self) -> DropletCreateImage {
        match self.image.parse::<u64>() {
            Ok(id) => DropletCreateImage::id(id),
            Err(_) => DropletCreateImage::slug(&self.image),
        }
    }
}

impl Default for DropletTemplate {
    fn default() -> Self {
        Self {
            region: "nyc3".to_string(),
            size: "s-1vcpu-1gb".to_string(),
            image: "ubuntu-18-04-x64".to_string(),
            tags: Vec::new(),
        }
    }
}

/// Find a droplet by exact name
///
/// Scans the first page of the droplet listing in order and returns the first
/// droplet whose name matches, or `None` when there is no match.
///
/// # Errors
/// Propagates any error from the listing call.
pub async fn find_droplet(api: &dyn DropletApi, name: &str) -> Result<Option<Droplet>> {
    let droplets = api.list_droplets().await?;
    Ok(droplets.into_iter().find(|droplet| droplet.name == name))
}

/// Create a droplet with every SSH key registered on the account
///
/// # Errors
/// Propagates errors from the key listing (no droplet is created) and from the
/// create call itself.
pub async fn create_droplet(
    api: &dyn DropletApi,
    name: &str,
    template: &DropletTemplate,
) -> Result<Droplet> {
    let keys = api.list_keys().await?;

    let request = DropletCreateRequest {
        name: name.to_string(),
        region: template.region.clone(),
        size: template.size.clone(),
        image: template.image(),
        ssh_keys: keys.iter().map(DropletCreateSshKey::from).collect(),
        tags: template.tags.clone(),
    };

    match api.create_droplet(&request).await {
        Ok(droplet) => {
            info!(id = droplet.id, name = %droplet.name, "created droplet");
            Ok(droplet)
        }
        Err(e) => {
            error!(name, error = %e, "failed to create droplet");
            Err(e)
        }
    }
}

/// Delete the droplet with the given name
///
/// Returns the droplet that was deleted.
///
/// # Errors
/// Returns [`ClientError::DropletNotFound`] without issuing a delete when no
/// droplet has that name; propagates listing and delete errors.
pub async fn delete_droplet(api: &dyn DropletApi, name: &str) -> Result<Droplet> {
    let droplet = find_droplet(api, name)
        .await?
        .ok_or_else(|| ClientError::DropletNotFound {
            name: name.to_string(),
        })?;

    api.delete_droplet(droplet.id).await?;
    info!(id = droplet.id, name = %droplet.name, "deleted droplet");
    Ok(droplet)
}
