//! Startup work and request handling of the demo site.

use std::sync::{atomic::{AtomicU64, Ordering}, Arc};

use anyhow::{Context, Result};
use chj_util::time_guard;
use log::{debug, info};
use rouille::{Request, Response};
use shtml::{assemble, BuildError, Node, PageMetadata, ScriptRef};

use crate::{asset::{compress_and_describe, read_asset},
            config::{SiteConfig, EMBEDDED_ASSET, EMBEDDED_PACKAGE_JSON},
            home::{count_dependencies, default_features, default_languages,
                   home_page, HomeContent},
            webutils::{errorpage_from_error, errorpage_from_status,
                       htmlresponse, streamed_htmlresponse, HttpStatus}};

pub const ASSET_URL: &str = "/static/site.js";

pub struct Site {
    pub config: SiteConfig,
    pub page: PageMetadata,
    pub content: Arc<HomeContent>,
    asset: Vec<u8>,
    global_count: AtomicU64,
}

pub fn page_metadata(config: &SiteConfig) -> PageMetadata {
    let mut page = PageMetadata::new(config.site_title.clone());
    page.description = Some("Declarative HTML, built and streamed on the server".into());
    page.stylesheets.extend(config.stylesheet_url.clone());
    page.scripts.push(ScriptRef {
        src: "https://code.iconify.design/3/3.1.0/iconify.min.js".into(),
        module: false,
        defer: true,
    });
    page.scripts.push(ScriptRef { defer: true, ..ScriptRef::new(ASSET_URL) });
    if let Some(url) = &config.script_url {
        page.scripts.push(ScriptRef { module: true, ..ScriptRef::new(url.clone()) });
    }
    page
}

impl Site {
    /// Reads and measures the asset, counts the package dependencies
    /// and prepares the static parts of the home page.
    pub fn load(config: SiteConfig) -> Result<Site> {
        time_guard!("Site::load");
        let asset = match &config.asset_path {
            Some(path) => read_asset(path)?,
            None => EMBEDDED_ASSET.to_vec(),
        };
        let bundle_size = compress_and_describe(&asset)?;
        info!("bundle: {} bytes, {} compressed", asset.len(), bundle_size.human_readable);

        let package_json = match &config.package_json_path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {path:?}"))?,
            None => EMBEDDED_PACKAGE_JSON.to_string(),
        };
        let dependency_count = count_dependencies(&package_json)?;

        let content = HomeContent::new(
            default_features(),
            &default_languages(),
            bundle_size,
            dependency_count)?;
        Ok(Site {
            page: page_metadata(&config),
            config,
            content: Arc::new(content),
            asset,
            global_count: AtomicU64::new(0),
        })
    }

    pub fn home_document(&self) -> Result<Node, BuildError> {
        assemble(home_page(&self.content)?, &self.page)
    }

    fn home_response(&self) -> Result<Response> {
        time_guard!("home tree");
        let tree = self.home_document()?;
        if self.config.stream_pages {
            streamed_htmlresponse(tree, HttpStatus::Ok200, self.config.render_channel_chunks)
        } else {
            Ok(htmlresponse(&tree, HttpStatus::Ok200))
        }
    }

    pub fn handle(&self, request: &Request) -> Response {
        time_guard!("Site::handle");
        let url = request.url();
        debug!("{} {url}", request.method());
        if request.method() != "GET" {
            return errorpage_from_status(HttpStatus::MethodNotAllowed405, &self.page)
        }
        match url.as_str() {
            "/" => self.home_response().unwrap_or_else(
                |e| errorpage_from_error(e, &self.page)),
            ASSET_URL => Response::from_data("text/javascript; charset=utf-8",
                                             self.asset.clone()),
            "/api/globalCount" => {
                let n = self.global_count.fetch_add(1, Ordering::SeqCst) + 1;
                Response::text(format!("Global count: {n}"))
            }
            _ => errorpage_from_status(HttpStatus::NotFound404, &self.page),
        }
    }
}
