use std::{fs::File, io::stdout, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;
use shtml::render_document;
use shtml_site::{config::SiteConfig, site::Site};

#[derive(clap::Parser, Debug)]
/// Write the home page as a complete HTML document.
struct Args {
    /// The file to write to, stdout if not given
    #[clap(long)]
    out: Option<PathBuf>,

    /// The bundle whose compressed size is shown (default: ASSET_PATH
    /// env var, or the embedded one)
    #[clap(long)]
    asset: Option<PathBuf>,

    /// The package.json to count dependencies from (default:
    /// PACKAGE_JSON env var, or the embedded one)
    #[clap(long)]
    package_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = SiteConfig::from_env()?;
    if args.asset.is_some() {
        config.asset_path = args.asset;
    }
    if args.package_json.is_some() {
        config.package_json_path = args.package_json;
    }
    let site = Site::load(config)?;
    let tree = site.home_document()?;

    match &args.out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {path:?}"))?;
            render_document(&tree, file)
                .with_context(|| format!("writing {path:?}"))?;
            info!("wrote {path:?}");
        }
        None => render_document(&tree, stdout().lock())?,
    }
    Ok(())
}
