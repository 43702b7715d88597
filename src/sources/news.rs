use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

pub const NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";

/// Shown in every headline line after a failed fetch.
pub const HEADLINES_UNAVAILABLE: &str = "Could not load headlines.";

/// Number of headline lines on the display.
pub const MAX_HEADLINES: usize = 4;

/// Longest headline, in characters, shown without truncation.
pub const MAX_HEADLINE_CHARS: usize = 120;

/// Parameters of the article search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub topic: String,
    pub language: String,
    pub sort_by: String,
    pub page_size: usize,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            topic: "India".into(),
            language: "en".into(),
            sort_by: "publishedAt".into(),
            page_size: MAX_HEADLINES,
        }
    }
}

/// Provider of raw headline titles.
pub trait HeadlineSource: Send + Sync {
    fn fetch(&self, api_key: &str) -> Result<Vec<String>>;

    /// Topic shown in the panel header.
    fn topic(&self) -> &str;
}

#[derive(Deserialize)]
struct Response {
    status: Option<String>,
    message: Option<String>,
    articles: Option<Vec<Article>>,
}

#[derive(Deserialize)]
struct Article {
    title: Option<String>,
}

/// NewsAPI `everything` endpoint client.
pub struct NewsApiClient {
    client: Client,
    url: String,
    query: NewsQuery,
}

impl NewsApiClient {
    pub fn new(query: NewsQuery) -> Result<Self> {
        Self::with_url(NEWSAPI_URL, query)
    }

    pub fn with_url(url: impl Into<String>, query: NewsQuery) -> Result<Self> {
        let client = Client::builder().user_agent("smart-mirror news").build()?;
        Ok(Self {
            client,
            url: url.into(),
            query,
        })
    }
}

impl HeadlineSource for NewsApiClient {
    fn fetch(&self, api_key: &str) -> Result<Vec<String>> {
        let page_size = self.query.page_size.to_string();
        let resp = self
            .client
            .get(&self.url)
            .header("X-Api-Key", api_key)
            .query(&[
                ("q", self.query.topic.as_str()),
                ("language", self.query.language.as_str()),
                ("sortBy", self.query.sort_by.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .context("news request failed")?
            .error_for_status()?;
        let body = resp.bytes().context("read news body")?;
        parse_titles(&body)
    }

    fn topic(&self) -> &str {
        &self.query.topic
    }
}

/// Titles of the first [`MAX_HEADLINES`] articles that have one.
pub fn parse_titles(body: &[u8]) -> Result<Vec<String>> {
    let resp: Response = serde_json::from_slice(body).context("parse news response")?;
    if let Some(status) = resp.status.as_deref() {
        if status != "ok" {
            bail!(
                "news api returned status {status}: {}",
                resp.message.unwrap_or_default()
            );
        }
    }
    let Some(articles) = resp.articles else {
        bail!("missing `articles`");
    };
    Ok(articles
        .into_iter()
        .filter_map(|a| a.title)
        .take(MAX_HEADLINES)
        .collect())
}

/// Collapse whitespace runs and truncate to [`MAX_HEADLINE_CHARS`]
/// characters with a trailing `...`.
pub fn format_headline(title: &str) -> String {
    let clean = title.split_whitespace().collect::<Vec<_>>().join(" ");
    if clean.chars().count() > MAX_HEADLINE_CHARS {
        let mut cut: String = clean.chars().take(MAX_HEADLINE_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        clean
    }
}
