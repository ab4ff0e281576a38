use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::CorpusError;

/// An HTTP client that only allows requests to approved domains.
/// Reference-text fetching is the only network traffic mutaprep produces.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient with the default reference-article allowlist.
    pub fn new(timeout: Duration) -> Result<Self, CorpusError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "en.wikipedia.org", // Reference articles
            "localhost",        // Local mirrors
            "127.0.0.1",        // Localhost alt
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("mutaprep/", env!("CARGO_PKG_VERSION"), " (research)"))
            .build()?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Builds a GET request if the URL passes the allowlist.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, CorpusError> {
        if !self.is_allowed(url) {
            return Err(CorpusError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SandboxClient {
        SandboxClient::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_wikipedia_allowed() {
        assert!(client().is_allowed("https://en.wikipedia.org/wiki/KRAS"));
    }

    #[test]
    fn test_unknown_domain_rejected() {
        let c = client();
        assert!(!c.is_allowed("https://example.com/KRAS"));
        assert!(!c.is_allowed("not a url"));
        assert!(matches!(c.get("https://example.com/"), Err(CorpusError::Security(_))));
    }

    #[test]
    fn test_allow_domain_covers_subdomains() {
        let mut c = client();
        c.allow_domain("wikimirror.org");
        assert!(c.is_allowed("https://de.wikimirror.org/wiki/TP53"));
    }
}
