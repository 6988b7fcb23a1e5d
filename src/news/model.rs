use serde::Serialize;

/// One entry returned by the news lookup for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// The provider's identifier for the article, when it sends one.
    pub uuid: Option<String>,
    /// The headline of the article.
    pub title: String,
    /// A direct link to the article. Unique within one fetch.
    pub link: String,
    /// The publisher of the article (e.g., "Reuters", "Associated Press").
    pub publisher: Option<String>,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub provider_publish_time: i64,
    /// `provider_publish_time` rendered as `YYYY-MM-DD HH:MM:SS` in UTC.
    pub published: String,
}
