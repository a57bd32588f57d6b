use std::{sync::Arc, thread};

use anyhow::{anyhow, bail, Result};
use log::info;
use rouille::Server;
use shtml_site::{config::SiteConfig, site::Site};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    let addr = config.listen_http.clone();
    let site = Arc::new(Site::load(config)?);

    let http_thread = thread::Builder::new().name("website_http".into()).spawn({
        let addr = addr.clone();
        move || -> Result<()> {
            let server = Server::new(addr, move |request| site.handle(request))
                .map_err(|e| anyhow!("can't listen: {e}"))?;
            info!("listening on http://{}", server.server_addr());
            server.run();
            Ok(())
        }
    })?;

    http_thread.join().map_err(|_| anyhow!("http thread panicked"))??;
    bail!("Server on {addr} stopped.");
}
