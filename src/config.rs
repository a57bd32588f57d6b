//! Site configuration from environment variables.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chj_util::env::{getenv, getenv_bool, getenv_or, getenv_parse};
use kstring::KString;

/// The bundle whose compressed size is shown on the home page, unless
/// `ASSET_PATH` is given.
pub const EMBEDDED_ASSET: &[u8] = include_bytes!("../static/site.js");

pub const EMBEDDED_PACKAGE_JSON: &str = include_str!("../static/package.json");

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub listen_http: String,
    pub asset_path: Option<PathBuf>,
    pub package_json_path: Option<PathBuf>,
    pub site_title: KString,
    pub stylesheet_url: Option<KString>,
    pub script_url: Option<KString>,
    /// Number of chunks buffered between the renderer and a client.
    pub render_channel_chunks: usize,
    /// Render pages in a separate thread while sending them; off
    /// renders the whole page in the request thread first.
    pub stream_pages: bool,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let render_channel_chunks = getenv_parse("RENDER_CHANNEL_CHUNKS", 16)?;
        if render_channel_chunks == 0 {
            bail!("RENDER_CHANNEL_CHUNKS must be at least 1");
        }
        Ok(SiteConfig {
            listen_http: getenv_or("LISTEN_HTTP", Some("127.0.0.1:3000"))?,
            asset_path: getenv("ASSET_PATH")?.map(PathBuf::from),
            package_json_path: getenv("PACKAGE_JSON")?.map(PathBuf::from),
            site_title: getenv_or("SITE_TITLE", Some("Declarative HTML"))?.into(),
            stylesheet_url: getenv("STYLESHEET_URL")?.map(KString::from),
            script_url: getenv("SCRIPT_URL")?.map(KString::from),
            render_channel_chunks,
            stream_pages: getenv_bool("STREAM_PAGES", true)?,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            listen_http: "127.0.0.1:3000".into(),
            asset_path: None,
            package_json_path: None,
            site_title: KString::from_static("Declarative HTML"),
            stylesheet_url: None,
            script_url: None,
            render_channel_chunks: 16,
            stream_pages: true,
        }
    }
}
