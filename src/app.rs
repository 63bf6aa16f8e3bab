// src/app.rs
use std::io;

use anyhow::{Context, Result};
use log::info;
use remote_index_infra::{CachedIndex, HomeDirectoryResolver, WalkScanner};
use remote_index_shared_kernel::PathResolver;
use remote_index_usecase::IndexGateway;

use crate::{
    config::{Config, Mode},
    presentation, serve,
};

/// Gateway wired to the in-memory cache and the parallel directory walker.
pub type LocalGateway = IndexGateway<CachedIndex<WalkScanner>>;

/// Builds the gateway described by `config`.
///
/// # Errors
/// Fails when the home directory cannot be determined or is not absolute.
pub fn build_gateway(config: &Config) -> Result<LocalGateway> {
    let home = HomeDirectoryResolver::resolve(config.home.clone())
        .context("invalid home directory")?
        .context("cannot determine the current user's home directory; pass --home")?;
    info!("expanding ~/ against {home}");

    let scanner = WalkScanner::new(config.scan.clone());
    Ok(IndexGateway::new(PathResolver::new(home), CachedIndex::new(scanner)))
}

pub fn run(config: &Config) -> Result<()> {
    let gateway = build_gateway(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.mode {
        Mode::Head(lookup) => {
            let response = gateway.head(Some(&lookup.request))?;
            presentation::write_head(&mut out, &response, lookup.format).context("failed to write output")?;
        }
        Mode::Get(lookup) => {
            let response = gateway.get(Some(&lookup.request))?;
            presentation::write_get(&mut out, &response, lookup.format).context("failed to write output")?;
        }
        Mode::Serve => {
            serve::serve(&gateway, io::stdin().lock(), out)?;
        }
    }
    Ok(())
}
