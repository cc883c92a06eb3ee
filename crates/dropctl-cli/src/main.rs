//! dropctl CLI
//!
//! Create, look up or delete a single named DigitalOcean droplet

use std::str::FromStr;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dropctl_client::droplet::{self, DropletTemplate};
use dropctl_client::{HttpClient, StaticTokenSource, http::DEFAULT_BASE_URL};

/// Manage a single DigitalOcean droplet
#[derive(Parser, Debug)]
#[command(name = "dropctl", version, about)]
struct Args {
    /// DigitalOcean API token
    #[arg(long, default_value = "")]
    token: String,

    /// Droplet name
    #[arg(long, default_value = "super-cool-droplet")]
    droplet_name: String,

    /// get/create/delete a droplet
    #[arg(long, default_value = "get")]
    action: String,

    /// API endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Region for new droplets
    #[arg(long, default_value = "nyc3")]
    region: String,

    /// Size slug for new droplets
    #[arg(long, default_value = "s-1vcpu-1gb")]
    size: String,

    /// Image slug or numeric image id for new droplets
    #[arg(long, default_value = "ubuntu-18-04-x64")]
    image: String,

    /// Tag for new droplets (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
}

impl Args {
    fn template(&self) -> DropletTemplate {
        DropletTemplate {
            region: self.region.clone(),
            size: self.size.clone(),
            image: self.image.clone(),
            tags: self.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Get,
    Create,
    Delete,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "create" => Ok(Self::Create),
            "delete" => Ok(Self::Delete),
            other => Err(other.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&args).await {
        tracing::error!("{err:#}");
        return Err(err);
    }

    Ok(())
}

async fn run(args: &Args) -> Result<()> {
    let Ok(action) = args.action.parse::<Action>() else {
        tracing::warn!(action = %args.action, "unknown action, nothing to do");
        return Ok(());
    };

    let client = HttpClient::builder(StaticTokenSource::new(args.token.clone()))
        .base_url(&args.api_url)
        .build()?;

    match action {
        Action::Get => match droplet::find_droplet(&client, &args.droplet_name).await? {
            Some(found) => {
                tracing::info!(ipv4 = found.public_ipv4().unwrap_or("-"), "droplet {found}");
            }
            None => tracing::info!(name = %args.droplet_name, "no droplet with that name"),
        },
        Action::Create => {
            let created =
                droplet::create_droplet(&client, &args.droplet_name, &args.template()).await?;
            tracing::info!(
                ipv4 = created.public_ipv4().unwrap_or("-"),
                "created droplet {created}"
            );
        }
        Action::Delete => {
            let deleted = droplet::delete_droplet(&client, &args.droplet_name).await?;
            tracing::info!("deleted droplet {deleted}");
        }
    }

    Ok(())
}
