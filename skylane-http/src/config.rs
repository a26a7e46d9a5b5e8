use skylane_core::SkylaneError;
use url::Url;

/// Where a backend lives and which HTTP client reaches it.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base: Url,
    client: Option<reqwest::Client>,
}

impl HttpConfig {
    /// Parse `base` as the backend root, e.g. `https://flights.example.com/`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` is not an absolute http(s) URL.
    pub fn new(base: &str) -> Result<Self, SkylaneError> {
        let mut url = Url::parse(base)
            .map_err(|e| SkylaneError::InvalidArg(format!("base url '{base}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SkylaneError::InvalidArg(format!(
                "base url '{base}' must use http or https"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base: url,
            client: None,
        })
    }

    /// Reuse an existing client (connection pool, proxies, TLS settings).
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Backend root with a trailing slash.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    pub(crate) fn client(&self) -> reqwest::Client {
        self.client.clone().unwrap_or_default()
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, SkylaneError> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                SkylaneError::InvalidArg(format!("base url '{}' cannot be a base", self.base))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}
