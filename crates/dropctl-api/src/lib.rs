//! dropctl-api: DigitalOcean wire types
//!
//! Contains the droplet and SSH key models, the droplet creation request and the
//! response envelopes returned by the `v2` API, shared by the client and the CLI.

pub mod models;
pub mod requests;
pub mod responses;

pub use models::{Droplet, Image, NetworkAddress, Networks, Region, SshKey};
pub use requests::{DropletCreateImage, DropletCreateRequest, DropletCreateSshKey};
