use clap::Parser;

use crate::error::{Result, UpdateError};
use crate::updater::{UpdateRequest, UpdateTarget};

/// Update the IP address for a Cloudflare subdomain A record.
///
/// Credentials are read from CLOUDFLARE_API_TOKEN, from CLOUDFLARE_EMAIL and
/// CLOUDFLARE_API_KEY, or from CLOUDFLARE_API_KEY alone as a scoped token.
/// A .env file in the working directory is honoured.
#[derive(Parser, Debug)]
#[command(name = "update-dns", version)]
pub struct Cli {
    /// Domain name (e.g. example.com)
    #[arg(short, long, value_name = "domain")]
    pub domain: Option<String>,

    /// Sub domain (e.g. my-sub-domain), or @ for the domain itself
    #[arg(short, long, value_name = "sub-domain")]
    pub sub_domain: Option<String>,

    /// Fully-qualified name (e.g. www.example.com); the zone is looked up
    #[arg(short, long, value_name = "fqdn", conflicts_with_all = ["domain", "sub_domain"])]
    pub name: Option<String>,

    /// IP address to update
    #[arg(short, long, value_name = "ip")]
    pub ip: Option<String>,
}

impl Cli {
    /// Either `--name` or both `--domain` and `--sub-domain` must be given,
    /// together with `--ip`. Empty values count as missing.
    pub fn request(self) -> Result<UpdateRequest> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        match (
            present(self.name),
            present(self.domain),
            present(self.sub_domain),
            present(self.ip),
        ) {
            (Some(name), _, _, Some(ip)) => Ok(UpdateRequest::Fqdn { name, ip }),
            (None, Some(domain), Some(sub_domain), Some(ip)) => {
                Ok(UpdateRequest::Split(UpdateTarget {
                    domain,
                    sub_domain,
                    ip,
                }))
            }
            _ => Err(UpdateError::MissingArgument),
        }
    }
}
