use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: IpAddr,
    pub port: u16,
    /// Directory served under `/assets`.
    pub assets: PathBuf,
    /// When set, the page is written here instead of being served.
    pub export_dir: Option<PathBuf>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr: IpAddr = addr
            .parse()
            .with_context(|| format!("SITE_ADDR is not an IP address: {addr:?}"))?;

        let port: u16 = match lookup("SITE_PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let assets = lookup("SITE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(default_assets);

        let export_dir = lookup("SITE_EXPORT_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, port, assets, export_dir })
    }
}

fn default_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}
