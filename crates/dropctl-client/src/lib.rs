//! dropctl-client: DigitalOcean droplet client library
//!
//! Provides a bearer-token authenticated HTTP client for the DigitalOcean API and
//! the droplet operations built on top of it.
//!
//! # Example
//!
//! ```no_run
//! use dropctl_client::{HttpClient, StaticTokenSource, droplet};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new(StaticTokenSource::new("dop_v1_..."))?;
//!
//! if let Some(found) = droplet::find_droplet(&client, "super-cool-droplet").await? {
//!     println!("{found}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod droplet;
pub mod error;
pub mod http;

pub use api::DropletApi;
pub use auth::{StaticTokenSource, Token, TokenSource};
pub use droplet::DropletTemplate;
pub use error::{ClientError, Result};
pub use http::{HttpClient, HttpClientBuilder};
