//! Wikipedia gene article client.
//!
//! Endpoint: https://en.wikipedia.org/wiki/<GENE>
//!
//! Only the body paragraphs of the article are kept: the `<p>` elements
//! under the first `div` of `#mw-content-text`. Short paragraphs (infobox
//! captions, stubs) are dropped and the rest is NFKD-folded to ASCII.

use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use mutaprep_common::sandbox::SandboxClient as Client;
use mutaprep_common::{CorpusError, ReferencesConfig};
use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};
use unicode_normalization::UnicodeNormalization;
use url::Url;

use super::ReferenceSource;

lazy_static! {
    static ref CONTENT: Selector = Selector::parse("#mw-content-text").unwrap();
    static ref DIV: Selector = Selector::parse("div").unwrap();
    static ref PARAGRAPH: Selector = Selector::parse("p").unwrap();
}

pub struct WikipediaSource {
    client: Client,
    base_url: String,
    min_chars: usize,
    min_words: usize,
}

impl WikipediaSource {
    /// The host of `base_url` is added to the client allowlist.
    pub fn new(config: &ReferencesConfig) -> mutaprep_common::Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            CorpusError::Config(format!("Invalid references.base_url '{}': {e}", config.base_url))
        })?;
        let host = base.host_str().ok_or_else(|| {
            CorpusError::Config(format!("references.base_url '{}' has no host", config.base_url))
        })?;

        let mut client = Client::new(Duration::from_secs(config.timeout_secs))?;
        client.allow_domain(host);

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            min_chars: config.min_paragraph_chars,
            min_words: config.min_paragraph_words,
        })
    }

    pub fn article_url(&self, gene: &str) -> String {
        format!("{}{}", self.base_url, gene)
    }
}

#[async_trait]
impl ReferenceSource for WikipediaSource {
    #[instrument(skip(self))]
    async fn fetch(&self, gene: &str) -> anyhow::Result<String> {
        let url = self.article_url(gene);
        let resp = self.client.get(&url)?.send().await?;

        if !resp.status().is_success() {
            warn!("Wikipedia returned status {} for {}", resp.status(), gene);
            anyhow::bail!("HTTP {} for {}", resp.status(), url);
        }

        let html = resp.text().await?;
        let paragraphs = extract_paragraphs(&html, self.min_chars, self.min_words);
        debug!(paragraphs = paragraphs.len(), "Extracted article paragraphs");
        Ok(paragraphs.join("\n"))
    }
}

/// Body paragraphs of an article page, filtered and folded to ASCII.
///
/// A paragraph is kept if, after trimming, it has more than `min_chars`
/// characters and more than `min_words` whitespace-separated words.
/// Folding decomposes compatibility forms first (`é` → `e`, no-break
/// space → space), then drops whatever is still non-ASCII.
pub fn extract_paragraphs(html: &str, min_chars: usize, min_words: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let Some(body) = document
        .select(&CONTENT)
        .next()
        .and_then(|content| content.select(&DIV).next())
    else {
        return Vec::new();
    };

    body.select(&PARAGRAPH)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|t| t.chars().count() > min_chars && t.split_whitespace().count() > min_words)
        .map(|t| t.nfkd().filter(char::is_ascii).collect())
        .collect()
}
