//! `uxa embed <url>` – print the embeddable preview URL.

use anyhow::{Context, Result};
use uxa_core::config::UxaConfig;
use uxa_core::url_model::embed_url;
use uxa_core::AnalysisRequest;

pub fn run_embed(cfg: &UxaConfig, url: &str) -> Result<()> {
    let validated = AnalysisRequest::new(url).validate().map_err(|err| {
        let notice = err.notice();
        anyhow::Error::new(err).context(notice.to_string())
    })?;
    let embed = embed_url(&cfg.preview.embed_endpoint, validated.raw_url())
        .with_context(|| format!("invalid embed endpoint {}", cfg.preview.embed_endpoint))?;
    println!("{embed}");
    Ok(())
}
